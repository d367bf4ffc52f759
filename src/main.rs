use std::env;
use std::process;

use clap::{App, Arg, ArgGroup};

use sokoban_search::config::{Config, Heuristic, Method};
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("martin-t")
        .version("0.1")
        .arg(
            Arg::with_name("depth-first")
                .short("d")
                .long("depth-first")
                .help("search depth-first, finds a solution but not necessarily the cheapest"),
        )
        .arg(
            Arg::with_name("best-first")
                .short("b")
                .long("best-first")
                .help("search best-first ordered by cost + heuristic (default)"),
        )
        .group(
            ArgGroup::with_name("method")
                .arg("depth-first")
                .arg("best-first"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("e")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["zero", "simple", "complex"])
                .help("estimate of the remaining cost (default: simple)"),
        )
        .arg(
            Arg::with_name("max-visited")
                .short("m")
                .long("max-visited")
                .takes_value(true)
                .validator(|s| {
                    s.parse::<usize>()
                        .map(|_| ())
                        .map_err(|_| format!("{} is not a number", s))
                })
                .help("give up after visiting this many unique states"),
        )
        .arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("log progress every time a new depth is reached (needs RUST_LOG=info)"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let method = if matches.is_present("depth-first") {
        Method::DepthFirst
    } else {
        Method::BestFirst
    };
    let heuristic = matches
        .value_of("heuristic")
        .map(|h| h.parse::<Heuristic>())
        .unwrap_or(Ok(Heuristic::Simple))
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    let mut config = Config::new(method, heuristic);
    // already validated by clap
    config.max_visited = matches
        .value_of("max-visited")
        .and_then(|n| n.parse().ok());
    config.print_status = matches.is_present("status");

    // file is required so clap guarantees it's present
    let path = matches.value_of("file").unwrap_or_default();

    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(current_dir) => eprintln!(
                "Can't load level {} in {}: {}",
                path,
                current_dir.display(),
                err
            ),
            Err(_) => eprintln!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve(&config).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    if solver_ok.is_solved() {
        println!("Found solution:");
        for state in &solver_ok.path_states {
            println!("{}", level.map.format_with_state(state));
        }
        match solver_ok.moves() {
            Some(moves) => {
                println!("{}", moves);
                println!("Moves: {}", moves.move_cnt());
                println!("Pushes: {}", moves.push_cnt());
            }
            None => eprintln!("Solution path doesn't consist of single moves"),
        }
    } else {
        println!("No solution");
    }
    println!("Cost: {}", solver_ok.cost);

    if matches.is_present("stats") {
        println!("{}", solver_ok.stats);
    }
}
