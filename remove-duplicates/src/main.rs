use clap::Parser;

const DEFAULT_NUMS: [i32; 10] = [0, 0, 1, 1, 1, 2, 2, 3, 3, 4];

#[derive(Parser, Debug)]
#[clap(about = "Remove duplicates from a sorted array, in place")]
struct CmdOptions {
    #[clap(allow_hyphen_values = true, help = "Numbers in non-decreasing order")]
    nums: Vec<i32>,
}

/// Compacts a sorted slice so each value appears once at the front. Returns how many values are
/// kept; whatever sits past that point is left over from the scan.
fn remove_duplicates(nums: &mut [i32]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut unique = 1;
    for i in 1..nums.len() {
        if nums[i] != nums[unique - 1] {
            nums[unique] = nums[i];
            unique += 1;
        }
    }
    unique
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
    let mut nums = if options.nums.is_empty() {
        DEFAULT_NUMS.to_vec()
    } else {
        options.nums
    };
    if !is_sorted(&nums) {
        log::error!("Input must be sorted in non-decreasing order: {:?}", nums);
        std::process::exit(1);
    }
    log::info!("Input: {:?}", nums);

    let len = remove_duplicates(&mut nums);
    log::debug!("Dropped {} duplicates", nums.len() - len);
    println!("{} {:?}", len, &nums[..len]);
}
