//! Wire representation for money values.

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Convert a money value to its JSON number form.
///
/// Two-decimal money values are always representable as `f64`; the zero
/// fallback is unreachable for catalog-derived prices.
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
