use crate::moves::{Move, Moves};
use crate::solver::node::SearchNode;
use crate::state::State;

// Terminology:
// move = changing one agent's position by one cell
// push = a move that also changes a box position
// step = a move that doesn't change a box position

/// States from the initial one to `final_node`, both included.
pub(crate) fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<State> {
    let mut ret = Vec::with_capacity(final_node.depth as usize + 1);
    let mut node = Some(final_node);
    while let Some(cur) = node {
        ret.push(cur.state.clone());
        node = cur.prev;
    }
    ret.reverse();
    ret
}

/// `None` if any two consecutive states aren't one move apart.
pub(crate) fn reconstruct_moves(states: &[State]) -> Option<Moves> {
    let mut moves = Moves::default();
    for pair in states.windows(2) {
        moves.add(move_between_states(&pair[0], &pair[1])?);
    }
    Some(moves)
}

/// Exactly one agent moved by one cell and at most one box moved ahead of it.
fn move_between_states(old: &State, new: &State) -> Option<Move> {
    if old.agents.len() != new.agents.len() || old.boxes.len() != new.boxes.len() {
        return None;
    }

    let mut moved_agents = old
        .agents
        .iter()
        .zip(&new.agents)
        .enumerate()
        .filter(|&(_, (old_pos, new_pos))| old_pos != new_pos);
    let (agent, (&old_agent_pos, &new_agent_pos)) = moved_agents.next()?;
    if moved_agents.next().is_some() {
        return None;
    }
    let dir = old_agent_pos.dir_to(new_agent_pos)?;

    // box order is stable so a push changes exactly one index
    let mut moved_boxes = old
        .boxes
        .iter()
        .zip(&new.boxes)
        .filter(|&(old_pos, new_pos)| old_pos != new_pos);
    match moved_boxes.next() {
        None => Some(Move::new(agent, dir, false)),
        Some((&old_box_pos, &new_box_pos)) => {
            if moved_boxes.next().is_some()
                || old_box_pos != new_agent_pos
                || new_box_pos != new_agent_pos + dir
            {
                return None;
            }
            Some(Move::new(agent, dir, true))
        }
    }
}
