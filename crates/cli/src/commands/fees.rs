//! CLI command to show marketplace fees for a single price.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

use skinscan_comparison::FeeCalculator;
use skinscan_core::ConfigLoader;

/// Arguments for the fees command.
#[derive(Args, Debug)]
pub struct FeesArgs {
    /// Marketplace name: steam, skinport or skinbaron.
    pub market: String,

    /// Listing price in USD.
    pub price: Decimal,

    /// Fee schedule path.
    #[arg(long, default_value = "config/fees.yaml")]
    pub fees: PathBuf,
}

/// Loads the fee schedule and prints buyer total and seller net.
pub fn run_fees(args: &FeesArgs) -> Result<()> {
    let schedule = ConfigLoader::load_fees(&args.fees)?;
    let calculator = FeeCalculator::with_schedule(schedule);

    let (buyer, seller) = fee_lines(&calculator, &args.market, args.price);

    println!("\n=== Fees: {} @ ${:.2} ===\n", args.market, args.price);
    println!("Buyer pays:      ${:.2}", buyer);
    println!("Seller receives: ${:.2}", seller);

    if args.market.parse::<skinscan_comparison::Marketplace>().is_err() {
        println!("\nUnknown marketplace; price shown unchanged.");
    }

    Ok(())
}

fn fee_lines(calculator: &FeeCalculator, market: &str, price: Decimal) -> (Decimal, Decimal) {
    (
        calculator.buyer_total(market, price),
        calculator.seller_net(market, price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use skinscan_core::{FeeSchedule, MarketFees};

    #[test]
    fn test_fee_lines_defaults() {
        let calculator = FeeCalculator::new();

        assert_eq!(
            fee_lines(&calculator, "steam", dec!(100)),
            (dec!(100), dec!(85.00))
        );
        assert_eq!(
            fee_lines(&calculator, "skinport", dec!(100)),
            (dec!(100), dec!(88.00))
        );
    }

    #[test]
    fn test_fee_lines_configured_buyer_extra() {
        let schedule = FeeSchedule::default().with_market(
            "skinport",
            MarketFees {
                buyer_extra_rate: Some(dec!(0.05)),
                seller_fee_rate: None,
            },
        );
        let calculator = FeeCalculator::with_schedule(schedule);

        let (buyer, seller) = fee_lines(&calculator, "skinport", dec!(100));
        assert_eq!(buyer, dec!(105));
        assert_eq!(seller, dec!(88));
    }

    #[test]
    fn test_fee_lines_unknown_market() {
        let calculator = FeeCalculator::new();
        assert_eq!(
            fee_lines(&calculator, "bitskins", dec!(10)),
            (dec!(10), dec!(10))
        );
    }
}
