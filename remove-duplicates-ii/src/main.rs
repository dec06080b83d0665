use clap::Parser;

const DEFAULT_NUMS: [i32; 6] = [1, 1, 1, 2, 2, 3];
const MAX_REPEATS: usize = 2;

#[derive(Parser, Debug)]
#[clap(about = "Remove duplicates from a sorted array, keeping a bounded number of copies")]
struct CmdOptions {
    #[clap(allow_hyphen_values = true, help = "Numbers in non-decreasing order")]
    nums: Vec<i32>,
    #[clap(
        long,
        help = "How many copies of each value to keep",
        default_value_t = MAX_REPEATS
    )]
    max_repeats: usize,
}

/// Compacts a sorted slice so that each value appears at most `max_repeats` times at the front,
/// and returns the number of values kept.
///
/// Since the input is sorted, a value may be written only if it differs from the one
/// `max_repeats` slots back in the output.
fn remove_duplicates(nums: &mut [i32], max_repeats: usize) -> usize {
    let mut kept = 0;
    for i in 0..nums.len() {
        if kept < max_repeats || nums[i] != nums[kept - max_repeats] {
            nums[kept] = nums[i];
            kept += 1;
        }
    }
    kept
}

fn is_sorted(nums: &[i32]) -> bool {
    nums.windows(2).all(|w| w[0] <= w[1])
}

fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    if options.max_repeats < 1 {
        log::error!("--max-repeats must be at least 1.");
        std::process::exit(1);
    }
    let mut nums = if options.nums.is_empty() {
        DEFAULT_NUMS.to_vec()
    } else {
        options.nums
    };
    if !is_sorted(&nums) {
        log::error!("Input must be sorted in non-decreasing order: {:?}", nums);
        std::process::exit(1);
    }
    log::info!("Input: {:?} (keeping up to {} copies)", nums, options.max_repeats);

    let len = remove_duplicates(&mut nums, options.max_repeats);
    println!("{} {:?}", len, &nums[..len]);
}
