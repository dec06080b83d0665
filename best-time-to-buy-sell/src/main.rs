use clap::Parser;

const DEFAULT_PRICES: [u32; 6] = [7, 1, 5, 3, 6, 4];

/// Prices come in on the command line; with none given we fall back to the classic example.
#[derive(Parser, Debug)]
#[clap(about = "Best time to buy and sell a stock (one transaction)")]
struct CmdOptions {
    #[clap(help = "Stock price on each day, in order")]
    prices: Vec<u32>,
}

/// Returns the largest gain from buying on one day and selling on a later day, or 0 if prices
/// never go up.
fn max_profit(prices: &[u32]) -> u32 {
    let mut min_price_idx = 0;
    let mut max_profit = 0;
    for i in 1..prices.len() {
        if prices[i] < prices[min_price_idx] {
            min_price_idx = i;
        } else if prices[i] - prices[min_price_idx] > max_profit {
            max_profit = prices[i] - prices[min_price_idx];
        }
    }
    max_profit
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

    let profit = max_profit(&prices);
    log::debug!("Best single transaction over {} days", prices.len());
    println!("{}", profit);
}
