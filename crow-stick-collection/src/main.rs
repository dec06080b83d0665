// A crow sits on one tree in a row of trees and wants to build a nest. Each tree has some number
// of sticks lying under it. The crow flies outward from its tree, a few trees to the left and then
// a few to the right, picking up sticks as it goes, until it has enough for the nest or has been
// to every tree. Trees with no sticks aren't worth remembering.
use clap::Parser;

const DEFAULT_FOREST: [u32; 10] = [0; 10];
const DEFAULT_CROW: usize = 3;
const GOAL: u32 = 100;
const MAX_MOVES: usize = 2;

#[derive(Parser, Debug)]
#[clap(about = "Collect sticks for a nest from the trees around a crow")]
struct CmdOptions {
    #[clap(help = "Number of sticks under each tree, left to right")]
    forest: Vec<u32>,
    #[clap(long, help = "Index of the tree the crow starts on", default_value_t = DEFAULT_CROW)]
    crow: usize,
    #[clap(long, help = "Sticks needed for the nest", default_value_t = GOAL)]
    goal: u32,
    #[clap(
        long,
        help = "How many trees the crow visits on each side per round",
        default_value_t = MAX_MOVES
    )]
    max_moves: usize,
}

/// Returns the indices of the trees the crow took sticks from, in the order it visited them.
///
/// Each round the crow checks up to `max_moves` unvisited trees to its left (nearest first) and
/// then up to `max_moves` to its right. The goal is only checked between rounds, so the last round
/// may overshoot it. If the goal is still out of reach once every other tree has been visited,
/// the crow takes the sticks under its own tree last.
///
/// An empty forest, a crow outside the forest, or `max_moves == 0` yields nothing.
fn collect_sticks(forest: &[u32], crow: usize, goal: u32, max_moves: usize) -> Vec<usize> {
    let mut res = Vec::new();
    if crow >= forest.len() || max_moves == 0 {
        return res;
    }

    let goal = goal as u64;
    let mut total: u64 = 0;
    let mut left = crow;
    let mut right = crow;
    let mut visited = 0;

    while total < goal && visited + 1 < forest.len() {
        let next_left = left.saturating_sub(max_moves);
        for i in (next_left..left).rev() {
            total += forest[i] as u64;
            visited += 1;
            if forest[i] > 0 {
                res.push(i);
            }
        }
        left = next_left;

        let next_right = right.saturating_add(max_moves).min(forest.len() - 1);
        for i in right + 1..=next_right {
            total += forest[i] as u64;
            visited += 1;
            if forest[i] > 0 {
                res.push(i);
            }
        }
        right = next_right;
        log::trace!("Visited trees {}..={}, {} sticks so far", left, right, total);
    }

    if total < goal && forest[crow] > 0 {
        total += forest[crow] as u64;
        res.push(crow);
    }
    log::debug!("Collected {} sticks from {} trees", total, res.len());
    res
}

fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    let (forest, crow) = if options.forest.is_empty() {
        (DEFAULT_FOREST.to_vec(), DEFAULT_CROW)
    } else {
        (options.forest, options.crow)
    };
    if crow >= forest.len() {
        log::error!("The crow must start on one of the {} trees.", forest.len());
        std::process::exit(1);
    }
    if options.max_moves < 1 {
        log::error!("--max-moves must be at least 1.");
        std::process::exit(1);
    }
    log::info!(
        "Forest {:?}, crow on tree {}, needs {} sticks",
        forest,
        crow,
        options.goal
    );

    let trees = collect_sticks(&forest, crow, options.goal, options.max_moves);
    println!("{:?}", trees);
}
