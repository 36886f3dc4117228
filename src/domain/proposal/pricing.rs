//! Price breakdown for a quoted amount.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::Amount;

/// Swedish standard VAT rate (25 %).
pub const VAT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

const CURRENCY_SCALE: u32 = 2;

/// Net, VAT and gross for a single proposal.
///
/// `net` is the quoted amount untouched. `vat` and `gross` are rounded to
/// whole öre, half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
}

/// Computes the breakdown, adding VAT only when `include_vat` is set.
///
/// Returns `None` if the VAT arithmetic overflows.
pub fn compute_total(amount: Amount, include_vat: bool) -> Option<PriceBreakdown> {
    let net = amount.value();
    if !include_vat {
        return Some(PriceBreakdown {
            net,
            vat: Decimal::ZERO,
            gross: net,
        });
    }

    let vat = round_currency(net.checked_mul(VAT_RATE)?);
    let gross = round_currency(net.checked_mul(Decimal::ONE + VAT_RATE)?);
    Some(PriceBreakdown { net, vat, gross })
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn vat_rate_is_a_quarter() {
        assert_eq!(VAT_RATE, dec("0.25"));
    }

    #[test]
    fn with_vat_adds_twenty_five_percent() {
        let total = compute_total(amount("1000"), true).unwrap();
        assert_eq!(total.net, dec("1000"));
        assert_eq!(total.vat, dec("250"));
        assert_eq!(total.gross, dec("1250"));
    }

    #[test]
    fn without_vat_gross_equals_net() {
        let total = compute_total(amount("1000"), false).unwrap();
        assert_eq!(total.vat, Decimal::ZERO);
        assert_eq!(total.gross, dec("1000"));
    }

    #[test]
    fn vat_rounds_half_up_to_two_decimals() {
        // 0.10 * 0.25 = 0.025
        let total = compute_total(amount("0.10"), true).unwrap();
        assert_eq!(total.vat, dec("0.03"));
        assert_eq!(total.gross, dec("0.13"));
    }

    #[test]
    fn net_keeps_the_quoted_precision() {
        let total = compute_total(amount("99.999"), true).unwrap();
        assert_eq!(total.net, dec("99.999"));
        assert_eq!(total.gross, dec("125.00"));
    }

    #[test]
    fn zero_amount_yields_zero_totals() {
        let total = compute_total(Amount::ZERO, true).unwrap();
        assert_eq!(total.vat, Decimal::ZERO);
        assert_eq!(total.gross, Decimal::ZERO);
    }

    #[test]
    fn breakdown_serializes_values_as_text() {
        let json = serde_json::to_value(compute_total(amount("200"), true).unwrap()).unwrap();
        assert_eq!(json["net"], "200");
        assert_eq!(json["vat"], "50.00");
        assert_eq!(json["gross"], "250.00");
    }

    #[test]
    fn largest_amount_prices_exactly() {
        let total = compute_total(Amount::MAX, true).unwrap();
        assert_eq!(total.vat, dec("250000000000000"));
        assert_eq!(total.gross, dec("1250000000000000"));
    }

    #[test]
    fn largest_fractional_amount_prices_without_overflow() {
        let total = compute_total(amount("999999999999999.99"), true).unwrap();
        assert_eq!(total.gross, dec("1249999999999999.99"));
    }

    proptest! {
        #[test]
        fn gross_is_amount_times_one_and_a_quarter(ore in 0i64..=100_000_000_000_000_000i64) {
            let value = Decimal::new(ore, 2);
            let a = Amount::new(value).unwrap();

            let with_vat = compute_total(a, true).unwrap();
            prop_assert_eq!(with_vat.gross, round_currency(value * dec("1.25")));
            prop_assert_eq!(with_vat.net + with_vat.vat - with_vat.gross, Decimal::ZERO);

            let without_vat = compute_total(a, false).unwrap();
            prop_assert_eq!(without_vat.gross, value);
        }

        #[test]
        fn whole_amounts_gross_exactly(kronor in 0u64..=1_000_000_000_000_000u64) {
            let value = Decimal::from(kronor);
            let total = compute_total(Amount::new(value).unwrap(), true).unwrap();
            prop_assert_eq!(total.gross, value * dec("1.25"));
        }
    }
}
