use rust_decimal::Decimal;

/// Lenient wire-string parse. Malformed prices degrade to zero so display
/// paths never fail on bad data.
pub fn parse_price(price: &str) -> Decimal {
    price.trim().parse().unwrap_or(Decimal::ZERO)
}

/// `price * (1 - percentage/100)`, rounded to two decimal places.
///
/// Percentage is validated to [0, 100] at intake; a value outside that range
/// reaching this point is a caller bug, so it is clamped loudly rather than
/// propagated into a negative or inflated price.
pub fn discounted_price(price: &str, percentage: Decimal) -> Decimal {
    let percentage = if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        tracing::warn!(
            "Discount percentage {} outside [0, 100], clamping",
            percentage
        );
        percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    } else {
        percentage
    };

    let base = parse_price(price);
    (base * (Decimal::ONE - percentage / Decimal::ONE_HUNDRED)).round_dp(2)
}

/// Original minus discounted, never negative.
pub fn amount_saved(price: &str, percentage: Decimal) -> Decimal {
    let saved = parse_price(price) - discounted_price(price, percentage);
    saved.max(Decimal::ZERO)
}

/// Display fallback used when a price has to be rendered no matter what.
pub fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_percent_is_identity() {
        assert_eq!(discounted_price("249.50", dec!(0)), dec!(249.50));
    }

    #[test]
    fn hundred_percent_is_free() {
        assert_eq!(discounted_price("249.50", dec!(100)), dec!(0.00));
    }

    #[test]
    fn quarter_off_hundred() {
        assert_eq!(discounted_price("100", dec!(25)), dec!(75.00));
        assert_eq!(amount_saved("100", dec!(25)), dec!(25.00));
    }

    #[test]
    fn malformed_price_degrades_to_zero() {
        assert_eq!(parse_price("not-a-price"), Decimal::ZERO);
        assert_eq!(discounted_price("", dec!(30)), Decimal::ZERO);
        assert_eq!(format_inr(parse_price("oops")), "₹0.00");
    }

    #[test]
    fn out_of_range_percentage_is_clamped() {
        assert_eq!(discounted_price("100", dec!(150)), dec!(0.00));
        assert_eq!(discounted_price("100", dec!(-10)), dec!(100.00));
    }

    #[test]
    fn saved_amount_never_negative() {
        assert_eq!(amount_saved("100", dec!(-10)), Decimal::ZERO);
        assert_eq!(amount_saved("garbage", dec!(50)), Decimal::ZERO);
    }
}
