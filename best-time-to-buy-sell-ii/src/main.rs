use clap::Parser;

const DEFAULT_PRICES: [u32; 6] = [7, 1, 5, 3, 6, 4];

#[derive(Parser, Debug)]
#[clap(about = "Best time to buy and sell a stock (any number of transactions)")]
struct CmdOptions {
    #[clap(help = "Stock price on each day, in order")]
    prices: Vec<u32>,
}

/// Holding at most one share at a time but trading as often as we like, the best we can do is
/// collect every day-over-day rise. Each rise fits in a u32 but their sum may not.
fn max_profit(prices: &[u32]) -> u64 {
    let mut res: u64 = 0;
    for window in prices.windows(2) {
        if window[1] > window[0] {
            log::trace!("buy at {}, sell at {}", window[0], window[1]);
            res += (window[1] - window[0]) as u64;
        }
    }
    res
}

fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    let prices = if options.prices.is_empty() {
        DEFAULT_PRICES.to_vec()
    } else {
        options.prices
    };
    log::info!("Prices: {:?}", prices);

    println!("{}", max_profit(&prices));
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn best_single_transaction(prices: &[u32]) -> u32 {
        let mut best = 0;
        for i in 0..prices.len() {
            for j in i + 1..prices.len() {
                if prices[j] > prices[i] {
                    best = best.max(prices[j] - prices[i]);
                }
            }
        }
        best
    }

    #[test]
    fn test_example() {
        assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 7);
    }

    #[test]
    fn test_rising_prices() {
        assert_eq!(max_profit(&[1, 2, 3, 4, 5]), 4);
    }

    #[test]
    fn test_falling_prices() {
        assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
    }

    #[test]
    fn test_short_input() {
        assert_eq!(max_profit(&[]), 0);
        assert_eq!(max_profit(&[42]), 0);
    }

    #[test]
    fn test_sum_exceeds_u32() {
        let expected = 2 * u32::MAX as u64;
        assert_eq!(max_profit(&[0, u32::MAX, 0, u32::MAX]), expected);
    }

    #[test]
    fn test_repeat_call() {
        let prices = vec![3, 3, 5, 0, 0, 3, 1, 4];
        assert_eq!(max_profit(&prices), 8);
        assert_eq!(max_profit(&prices), 8);
    }

    #[test]
    fn test_never_worse_than_one_transaction() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(242);
        for _ in 0..200 {
            let len = rng.gen_range(0, 30);
            let prices: Vec<u32> = (0..len).map(|_| rng.gen_range(0, 100)).collect();
            let single = best_single_transaction(&prices);
            assert!(single as u64 <= max_profit(&prices), "prices: {:?}", prices);
        }
    }
}
