/// Round an exact amount to whole currency units
///
/// Ties round half away from zero. The float-to-integer cast saturates, so
/// an overflowed `+inf` becomes `i64::MAX` and NaN becomes zero.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_money(amount: f64) -> i64 {
    amount.round() as i64
}
