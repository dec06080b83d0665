use clap::Parser;
use std::collections::HashMap;

const DEFAULT_NUMS: [i32; 7] = [2, 2, 1, 1, 1, 2, 2];

#[derive(Parser, Debug)]
#[clap(about = "Find the value that makes up more than half of an array")]
struct CmdOptions {
    #[clap(allow_hyphen_values = true, help = "Numbers to search")]
    nums: Vec<i32>,
}

/// Counts occurrences while keeping track of the most frequent value seen so far. Returns None for
/// an empty slice.
///
/// The input is expected to have a majority element. If it doesn't, the answer is just whichever
/// value led the count at the end, which means nothing in particular.
fn majority_element(nums: &[i32]) -> Option<i32> {
    let (&first, rest) = nums.split_first()?;
    let mut counts: HashMap<i32, usize> = HashMap::new();
    counts.insert(first, 1);
    let mut mode = first;
    let mut mode_count = 1;

    for &num in rest {
        let count = counts.entry(num).or_insert(0);
        *count += 1;
        if *count > mode_count {
            mode = num;
            mode_count = *count;
        }
    }
    log::debug!("{} appears {} of {} times", mode, mode_count, nums.len());
    Some(mode)
}

fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    let nums = if options.nums.is_empty() {
        DEFAULT_NUMS.to_vec()
    } else {
        options.nums
    };
    log::info!("Input: {:?}", nums);

    match majority_element(&nums) {
        Some(m) => println!("{}", m),
        None => log::warn!("No elements given."),
    }
}
