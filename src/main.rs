use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rush_hour::{
    best_first_search_with_stats, depth_first_search_with_stats, parse_boards, shortest_path,
    Board, Heuristic,
};

// Format:
// the first line of a puzzle is its name, followed by the square grid.
// `.` is free space, `*` the goal vehicle,
// `<->` a horizontal vehicle and `^|v` a vertical one (read top to bottom).
// Puzzles are separated by blank lines.
const EXAMPLES: &str = "
Jam-1
<>...^
^..^.|
|**|.v
v..v..
^...<>
v.<->.

Jam-2
^..<->
v....^
.**..v
..^...
..|.<>
..v...

Jam-3
...^..
...|..
**.v.^
.....|
^^^<>v
vvv...
";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Best-first search guided by a heuristic.
    Astar,
    /// Depth-first search in identity order.
    Dfs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Estimate {
    Blocking,
    Advanced,
}

impl From<Estimate> for Heuristic {
    fn from(e: Estimate) -> Heuristic {
        match e {
            Estimate::Blocking => Heuristic::Blocking,
            Estimate::Advanced => Heuristic::Advanced,
        }
    }
}

/// Solves Rush Hour puzzles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file; the built-in puzzles are used when omitted.
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,

    /// Estimate used by best-first search.
    #[arg(long, value_enum, default_value_t = Estimate::Advanced)]
    heuristic: Estimate,

    /// Only solve the puzzle with this name.
    #[arg(short, long)]
    puzzle: Option<String>,

    /// Print every board along the solution.
    #[arg(long)]
    show_path: bool,

    /// Compare with the optimal cost from exhaustive breadth-first search.
    #[arg(long)]
    verify: bool,
}

fn load(args: &Args) -> Result<Vec<Board>> {
    let boards = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read puzzles from {}", path.display()))?;
            parse_boards(&text)
                .with_context(|| format!("Failed to parse puzzles in {}", path.display()))?
        }
        None => parse_boards(EXAMPLES).context("Failed to parse built-in puzzles")?,
    };

    match &args.puzzle {
        Some(name) => {
            let selected: Vec<Board> = boards
                .into_iter()
                .filter(|b| b.name() == name.as_str())
                .collect();
            if selected.is_empty() {
                bail!("No puzzle named {}", name);
            }
            Ok(selected)
        }
        None => Ok(boards),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    for board in load(&args)? {
        println!("----");
        println!("{}", board);
        println!("----");

        let (stats, (path, cost)) = match args.algorithm {
            Algorithm::Astar => {
                let heuristic = Heuristic::from(args.heuristic);
                best_first_search_with_stats(&board, |b: &Board| heuristic.evaluate(b))
            }
            Algorithm::Dfs => depth_first_search_with_stats(&board),
        };

        if cost < 0 {
            println!("No solution found");
        } else {
            println!("Found a solution in {} moves:", cost);
        }
        println!(
            "Expanded {} board positions (generated {} total).",
            stats.expanded, stats.generated
        );

        if args.verify {
            match shortest_path(&board) {
                Some((_, optimal)) => println!("Optimal solution is {} moves.", optimal),
                None => println!("Exhaustive search confirms there is no solution."),
            }
        }

        if args.show_path {
            for state in &path {
                println!();
                println!("{}", state.board());
            }
        }

        println!("----");
        println!();
    }

    Ok(())
}
