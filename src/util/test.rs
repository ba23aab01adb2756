use crate::models::{
    account::Account,
    bank::{Bank, BankID},
};
use rust_decimal::prelude::*;

pub fn make_account<T: Into<String>, D: Into<Decimal>>(holder: T, balance: D) -> Account {
    Account::builder()
        .holder(holder.into())
        .balance(balance.into())
        .build().unwrap()
}

pub fn make_bank<I: Into<BankID>, T: Into<String>>(id: I, name: T) -> Bank {
    Bank::builder()
        .id(id.into())
        .name(name.into())
        .build().unwrap()
}
