use clap::Parser;

const DEFAULT_NUMS: [i32; 7] = [1, 2, 3, 4, 5, 6, 7];
const DEFAULT_K: usize = 3;

#[derive(Parser, Debug)]
#[clap(about = "Rotate an array to the right, in place")]
struct CmdOptions {
    #[clap(allow_hyphen_values = true, help = "Numbers to rotate")]
    nums: Vec<i32>,
    #[clap(short, long, help = "Number of steps to rotate by", default_value_t = DEFAULT_K)]
    k: usize,
}

/// Rotates `nums` right by `k` steps (wrapping around for k >= len).
///
/// Reversing the whole slice puts the last k elements up front but backwards; reversing each of
/// the two pieces then fixes their order.
fn rotate(nums: &mut [i32], k: usize) {
    if nums.is_empty() {
        return;
    }
    let k = k % nums.len();
    nums.reverse();
    nums[..k].reverse();
    nums[k..].reverse();
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
    log::info!("Rotating {:?} by {}", nums, options.k);

    rotate(&mut nums, options.k);
    println!("{:?}", nums);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_example() {
        let mut v = DEFAULT_NUMS.to_vec();
        rotate(&mut v, DEFAULT_K);
        assert_eq!(v, vec![5, 6, 7, 1, 2, 3, 4]);
    }

    #[test]
    fn test_k_larger_than_len() {
        let mut v = vec![-1, -100, 3, 99];
        rotate(&mut v, 6);
        assert_eq!(v, vec![3, 99, -1, -100]);
    }

    #[test]
    fn test_full_turn() {
        let mut v = vec![1, 2, 3];
        rotate(&mut v, 0);
        assert_eq!(v, vec![1, 2, 3]);
        rotate(&mut v, 3);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_matches_std_rotate() {
        for k in 0..10 {
            let mut v: Vec<i32> = (0..7).collect();
            let mut expected = v.clone();
            expected.rotate_right(k % 7);
            rotate(&mut v, k);
            assert_eq!(v, expected, "k = {}", k);
        }
    }

    #[test]
    fn test_empty() {
        let mut v: Vec<i32> = vec![];
        rotate(&mut v, 5);
        assert!(v.is_empty());
    }
}
