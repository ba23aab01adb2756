//! A bank keeps a list of the accounts registered with it and moves money
//! between accounts.
//!
//! Transfers debit the source before crediting the destination. Credits
//! never fail, so a transfer either lands on both sides or (when the source
//! can't cover it) on neither.

use crate::{
    error::{Error, Result},
    models::account::Account,
};
use rust_decimal::prelude::*;

model_id! {
    /// Identifies a bank. Registered accounts hold a copy of it.
    pub struct BankID
}

model! {
    /// The bank model. A deserialized bank re-registers its accounts, so their
    /// links always point back at it.
    #[derive(PartialEq)]
    #[cfg_attr(feature = "with_serde", serde(from = "BankRecord"))]
    pub struct Bank {
        id: BankID,
        /// The bank's display name, ie "Banco del Estado"
        name: String,
        /// Registered accounts, in the order they were added
        #[builder(setter(skip))]
        #[getset(skip)]
        accounts: Vec<Account>,
    }
    BankBuilder
}

/// A bank as it comes off the wire, before its accounts are registered.
#[cfg(feature = "with_serde")]
#[derive(serde_derive::Deserialize)]
struct BankRecord {
    id: BankID,
    name: String,
    #[serde(default)]
    accounts: Vec<Account>,
}

#[cfg(feature = "with_serde")]
impl From<BankRecord> for Bank {
    fn from(record: BankRecord) -> Self {
        let mut bank = Bank::new(record.id, record.name);
        for account in record.accounts {
            bank.add_account(account);
        }
        bank
    }
}

impl Bank {
    /// Create a bank with no accounts.
    pub fn new<I: Into<BankID>, T: Into<String>>(id: I, name: T) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    /// Registered accounts, in the order they were added. Accounts only get
    /// in through [add_account](#method.add_account).
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Register an account with this bank, linking it back to us. Accounts
    /// are not checked for duplicates. Returns the stored account.
    pub fn add_account(&mut self, mut account: Account) -> &mut Account {
        account.set_bank(Some(self.id.clone()));
        self.accounts.push(account);
        let position = self.accounts.len() - 1;
        tracing::debug!(bank = %self.id, holder = %self.accounts[position].holder(), position, "account registered");
        &mut self.accounts[position]
    }

    /// Find the first registered account belonging to `holder`.
    pub fn find_account(&self, holder: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.holder() == holder)
    }

    /// Find the first registered account belonging to `holder`, mutably.
    pub fn find_account_mut(&mut self, holder: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.holder() == holder)
    }

    /// Whether any registered account belongs to `holder`.
    pub fn has_account(&self, holder: &str) -> bool {
        self.accounts.iter().any(|account| account.holder() == holder)
    }

    /// The sum of every registered account's balance.
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|account| account.balance()).sum()
    }

    /// Move `amount` from `source` to `destination`. If `source` can't cover
    /// it we return [Error::InsufficientFunds] and neither account changes.
    ///
    /// The accounts don't need to be registered with this bank.
    pub fn transfer<T: Into<Decimal>>(&self, source: &mut Account, destination: &mut Account, amount: T) -> Result<()> {
        let amount = amount.into();
        source.debit(amount)?;
        destination.credit(amount);
        tracing::info!(bank = %self.id, from = %source.holder(), to = %destination.holder(), %amount, "transfer");
        Ok(())
    }

    /// Like [transfer](#method.transfer), but between two registered
    /// accounts given by position. Transferring from an account to itself is
    /// allowed and leaves it as it was, provided it could cover the amount.
    pub fn transfer_between<T: Into<Decimal>>(&mut self, source: usize, destination: usize, amount: T) -> Result<()> {
        let amount = amount.into();
        for position in &[source, destination] {
            if *position >= self.accounts.len() {
                Err(Error::AccountNotFound(*position))?;
            }
        }
        self.accounts[source].debit(amount)?;
        self.accounts[destination].credit(amount);
        tracing::info!(bank = %self.id, from = %self.accounts[source].holder(), to = %self.accounts[destination].holder(), %amount, "transfer");
        Ok(())
    }
}
