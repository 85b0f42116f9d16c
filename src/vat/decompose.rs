//! Gross price decomposition into net and VAT.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Net/VAT/gross amounts of one invoice line, already scaled by quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmounts {
    pub net_price: Decimal,
    pub vat_amount: Decimal,
    pub gross_price: Decimal,
}

/// Split a unit gross price into net and VAT, then scale by `quantity`.
///
/// The unit split is rounded to cents *before* multiplying:
///
/// ```text
/// unit_gross = round(unit_gross, 2)
/// unit_net   = round(unit_gross / (1 + vat_rate / 100), 2)
/// unit_vat   = round(unit_gross - unit_net, 2)
/// line       = (unit_net * q, unit_vat * q, unit_gross * q)
/// ```
///
/// For large quantities the line net can therefore differ by a cent or more
/// from `round(unit_gross * q / (1 + rate/100), 2)`. Existing invoice totals
/// rely on this ordering.
///
/// A quantity of 0 is treated as 1. A rate of -100% or below has no defined
/// split and is treated as 0%. Scaled amounts that exceed the `Decimal` range
/// saturate at [`Decimal::MAX`] (or [`Decimal::MIN`] for negative prices);
/// [`validate_products`](crate::core::validate_products) rejects such lines.
///
/// ```
/// use faktura_vat::vat::decompose;
/// use rust_decimal_macros::dec;
///
/// let line = decompose(dec!(123), dec!(23), 2);
/// assert_eq!(line.net_price, dec!(200));
/// assert_eq!(line.vat_amount, dec!(46));
/// assert_eq!(line.gross_price, dec!(246));
/// ```
pub fn decompose(unit_gross: Decimal, vat_rate: Decimal, quantity: u32) -> LineAmounts {
    let quantity = Decimal::from(quantity.max(1));
    let unit_gross = round_half_up(unit_gross, 2);

    let divisor = Decimal::ONE + vat_rate / dec!(100);
    let unit_net = if divisor > Decimal::ZERO {
        unit_gross
            .checked_div(divisor)
            .map(|net| round_half_up(net, 2))
            .unwrap_or(unit_gross)
    } else {
        unit_gross
    };
    let unit_vat = round_half_up(unit_gross - unit_net, 2);

    LineAmounts {
        net_price: unit_net.saturating_mul(quantity),
        vat_amount: unit_vat.saturating_mul(quantity),
        gross_price: unit_gross.saturating_mul(quantity),
    }
}

/// Decompose an entered line total: derive the unit gross by dividing by
/// `quantity`, then apply [`decompose`].
pub fn decompose_line(line_gross: Decimal, vat_rate: Decimal, quantity: u32) -> LineAmounts {
    let unit_gross = line_gross / Decimal::from(quantity.max(1));
    decompose(unit_gross, vat_rate, quantity)
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
