//! Utilities for working with the decimal numbers balances are made of.

/// Create an exact decimal number.
///
/// Balances and amounts are [rust_decimal::Decimal] values, and this wraps
/// the literal macro so callers (and our tests) never have to spell out
/// `Decimal::new(100012345, 5)` by hand or go through a lossy float:
///
/// ```
/// use cuenta_core::num;
///
/// assert_eq!((num!(1000.12345) - num!(100)).to_string(), "900.12345");
/// ```
#[macro_export]
macro_rules! num {
    ($($val:tt)*) => {
        rust_decimal_macros::dec!($($val)*)
    }
}
