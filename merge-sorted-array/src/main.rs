use clap::Parser;

const DEFAULT_FIRST: [i32; 3] = [1, 2, 3];
const DEFAULT_SECOND: [i32; 3] = [2, 5, 6];

#[derive(Parser, Debug)]
#[clap(about = "Merge one sorted array into another")]
struct CmdOptions {
    #[clap(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help = "First sorted list, comma separated"
    )]
    first: Vec<i32>,
    #[clap(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help = "Second sorted list, comma separated"
    )]
    second: Vec<i32>,
}

/// Merges the sorted `nums2[..n]` into `nums1`, whose first `m` slots hold sorted values and whose
/// next `n` slots are spare room. Afterwards `nums1[..m + n]` is sorted, with equal values from
/// `nums1` ahead of those from `nums2`.
///
/// Filling from the back means nothing in `nums1` gets overwritten before it has been placed.
/// `nums1` must be at least `m + n` long.
fn merge(nums1: &mut [i32], m: usize, nums2: &[i32], n: usize) {
    let mut i1 = m;
    let mut i2 = n;
    let mut write = m + n;
    while i2 > 0 {
        write -= 1;
        if i1 > 0 && nums1[i1 - 1] > nums2[i2 - 1] {
            nums1[write] = nums1[i1 - 1];
            i1 -= 1;
        } else {
            nums1[write] = nums2[i2 - 1];
            i2 -= 1;
        }
        log::trace!("slot {} <- {} (i1 = {}, i2 = {})", write, nums1[write], i1, i2);
    }
    // Whatever is left of nums1 is already in place.
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
    let (first, second) = if options.first.is_empty() && options.second.is_empty() {
        (DEFAULT_FIRST.to_vec(), DEFAULT_SECOND.to_vec())
    } else {
        (options.first, options.second)
    };
    if !is_sorted(&first) || !is_sorted(&second) {
        log::error!("Both lists must be sorted in non-decreasing order.");
        std::process::exit(1);
    }
    log::info!("Merging {:?} and {:?}", first, second);

    let m = first.len();
    let n = second.len();
    let mut nums1 = first;
    nums1.resize(m + n, 0);
    merge(&mut nums1, m, &second, n);
    println!("{:?}", nums1);
}
