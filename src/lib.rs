//! Welcome to the cuenta core, the data model behind our accounts.
//!
//! An [Account] holds a holder name and an exact decimal balance that can be
//! credited freely but never debited below zero. A [Bank] keeps an ordered
//! list of registered accounts, links each one back to itself by [BankID],
//! and moves money between accounts by debiting the source before crediting
//! the destination. A failed debit aborts the transfer with
//! [Error::InsufficientFunds][err_funds] and neither account changes.
//!
//! Balances are [rust_decimal::Decimal] values, so `1000.12345 - 100` is
//! exactly `900.12345`. The [num!] macro builds decimal literals:
//!
//! ```
//! use cuenta_core::{num, Account, Bank};
//!
//! let mut origin = Account::new("John Doe", num!(300));
//! let mut destination = Account::new("Andrés Guzmán", num!(1000.12345));
//! let bank = Bank::new("banco-estado", "Banco del Estado");
//! bank.transfer(&mut origin, &mut destination, num!(150)).unwrap();
//! assert_eq!(origin.balance().to_string(), "150");
//! assert_eq!(destination.balance().to_string(), "1150.12345");
//! ```
//!
//! Everything here is synchronous and unsynchronized. Mutation goes through
//! `&mut` borrows, which keeps a single caller honest, but a bank shared
//! between threads has to be wrapped in a lock (or owned by a single writer)
//! before the non-negative balance guarantee holds across concurrent
//! transfers.
//!
//! [err_funds]: error/enum.Error.html#variant.InsufficientFunds

/// A macro that standardizes including and exporting our models.
macro_rules! load_models {
    (
        @pub use
        $( ($path:ident, $model:ident $(, $extratypes:ident)*), )*
    ) => {
        pub use models::{
            $( $path::{$model $(, $extratypes)*}, )*
        };
    };

    (
        @pub mod
        $( ($path:ident, $($_rest:tt)*), )*
    ) => {
        $(
            pub mod $path;
        )*
    };

    // entry point
    ($($load_type:tt)*) => {
        load_models! {
            @$($load_type)*
            // the bank registers accounts, so accounts load first
            (account, Account),
            (bank, Bank, BankID),
        }
    };
}

pub mod error;
#[macro_use]
mod util;
pub mod models;

load_models!{ pub use }
