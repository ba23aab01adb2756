//! Accounts hold money for a single holder. Think of them like a checking
//! account: credits always land, debits only land if the money is there.

use crate::{
    error::{Error, Result},
    models::bank::BankID,
};
use rust_decimal::prelude::*;
use std::hash::{Hash, Hasher};

model! {
    /// An account. Two accounts are equal when their holder and balance are,
    /// regardless of which bank (if any) they are registered with. Balances
    /// must match in scale too, so `1000.12345` and `1000.123450` differ.
    pub struct Account {
        /// The name of the person that owns the account
        holder: String,
        /// The account's balance
        balance: Decimal,
        /// The bank this account was registered with. Set by
        /// [Bank::add_account](../bank/struct.Bank.html#method.add_account).
        #[builder(setter(skip))]
        #[getset(set = "pub(crate)")]
        bank: Option<BankID>,
    }
    AccountBuilder
}

impl Account {
    /// Create an unregistered account with an opening balance.
    pub fn new<T: Into<String>, D: Into<Decimal>>(holder: T, balance: D) -> Self {
        Self {
            holder: holder.into(),
            balance: balance.into(),
            bank: None,
        }
    }

    /// Take `amount` out of the account. The balance cannot go below zero:
    /// if it would, the account is left untouched and we return
    /// [Error::InsufficientFunds]. Returns the updated balance on success.
    pub fn debit<T: Into<Decimal>>(&mut self, amount: T) -> Result<&Decimal> {
        let amount = amount.into();
        let new_balance = self.balance - amount;
        if new_balance < Decimal::zero() {
            tracing::warn!(holder = %self.holder, %amount, balance = %self.balance, "debit rejected");
            Err(Error::InsufficientFunds)?;
        }
        self.balance = new_balance;
        tracing::debug!(holder = %self.holder, %amount, balance = %self.balance, "debit");
        Ok(&self.balance)
    }

    /// Put `amount` into the account. Returns the updated balance.
    pub fn credit<T: Into<Decimal>>(&mut self, amount: T) -> &Decimal {
        let amount = amount.into();
        self.balance += amount;
        tracing::debug!(holder = %self.holder, %amount, balance = %self.balance, "credit");
        &self.balance
    }

    /// The whole units of the balance, truncated toward zero. `None` if the
    /// balance doesn't fit in an i64.
    pub fn balance_int(&self) -> Option<i64> {
        self.balance.trunc().to_i64()
    }

    /// Whether this account has been added to a bank.
    pub fn is_registered(&self) -> bool {
        self.bank.is_some()
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.holder == other.holder
            && self.balance == other.balance
            && self.balance.scale() == other.balance.scale()
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.holder.hash(state);
        self.balance.hash(state);
        self.balance.scale().hash(state);
    }
}
