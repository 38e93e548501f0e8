//! Sign utilities for root-finding algorithms.
//! - `strict_sign_change` : `true` if values are nonzero with opposite signs

/// Returns `true` if `x` and `y` are both nonzero and have opposite signs.  
/// 
/// Equivalent to `x * y < 0.0` without the under/overflow of the product.
/// An exact zero never counts as a sign change.
#[inline]
pub(crate) fn strict_sign_change(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && x.is_sign_positive() != y.is_sign_positive()
}
