//! Models are the data structures the core mutates. An [Account] carries a
//! balance, a [Bank] carries the accounts registered with it.
//!
//! [Account]: account/struct.Account.html
//! [Bank]: bank/struct.Bank.html

#[macro_use]
mod lib;

load_models!{ pub mod }
