use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplaySettings;
use crate::tiers::format_number;

/// `$0.30`-style amount. Non-finite values fall back to their plain number text.
pub fn format_money(amount: f64, settings: &DisplaySettings) -> String {
    let Some(decimal) = Decimal::from_f64(amount) else {
        return format!("{}{}", settings.currency_symbol, format_number(amount));
    };

    let dp = settings.amount_decimals;
    let rounded = decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}{}{:.prec$}",
        settings.currency_symbol,
        rounded.abs(),
        prec = dp as usize
    )
}
