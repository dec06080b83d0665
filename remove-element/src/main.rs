use clap::Parser;

const DEFAULT_NUMS: [i32; 4] = [3, 2, 2, 3];
const DEFAULT_VAL: i32 = 3;

#[derive(Parser, Debug)]
#[clap(about = "Remove every occurrence of a value from an array, in place")]
struct CmdOptions {
    #[clap(allow_hyphen_values = true, help = "Numbers to filter")]
    nums: Vec<i32>,
    #[clap(
        long,
        allow_hyphen_values = true,
        help = "Value to remove",
        default_value_t = DEFAULT_VAL
    )]
    val: i32,
}

/// Moves every element not equal to `val` to the front of `nums`, keeping their relative order,
/// and returns how many there are.
fn remove_element(nums: &mut [i32], val: i32) -> usize {
    let mut kept = 0;
    for i in 0..nums.len() {
        if nums[i] != val {
            nums[kept] = nums[i];
            kept += 1;
        }
    }
    kept
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
    log::info!("Removing {} from {:?}", options.val, nums);

    let len = remove_element(&mut nums, options.val);
    log::debug!("Removed {} elements", nums.len() - len);
    println!("{} {:?}", len, &nums[..len]);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_example() {
        let mut v = vec![3, 2, 2, 3];
        let len = remove_element(&mut v, 3);
        assert_eq!(len, 2);
        let mut rest = v[..len].to_vec();
        rest.sort();
        assert_eq!(rest, vec![2, 2]);
    }

    #[test]
    fn test_keeps_order() {
        let mut v = vec![0, 1, 2, 2, 3, 0, 4, 2];
        let len = remove_element(&mut v, 2);
        assert_eq!(&v[..len], &[0, 1, 3, 0, 4]);
    }

    #[test]
    fn test_default_input() {
        let mut v = DEFAULT_NUMS.to_vec();
        assert_eq!(remove_element(&mut v, DEFAULT_VAL), 2);
    }

    #[test]
    fn test_value_missing() {
        let mut v = vec![1, 2, 3];
        assert_eq!(remove_element(&mut v, 9), 3);
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_everything() {
        let mut v = vec![4, 4, 4];
        assert_eq!(remove_element(&mut v, 4), 0);
        let mut empty: Vec<i32> = vec![];
        assert_eq!(remove_element(&mut empty, 4), 0);
    }
}
