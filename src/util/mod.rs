//! A set of utility macros and functions used throughout the core.

#[macro_use]
pub mod number;

#[cfg(test)]
pub(crate) mod test;
