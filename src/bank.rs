use rust_decimal::Decimal;
use tracing::debug;

use crate::account::{Account, AccountError};

/// A named bank holding an ordered sequence of accounts.
///
/// Insertion order is preserved and duplicates are allowed; adding the same
/// account twice simply appends it twice. Accounts record the bank's name
/// when added, so the relationship can be asserted from either side without
/// a cyclic reference.
#[derive(Debug, Default)]
pub struct Bank {
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renaming the bank does not restamp accounts added earlier; the
    /// back-reference is a point-in-time copy of the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }

    /// Replaces the whole account sequence. Unlike [`Bank::add_account`]
    /// this does not stamp the bank name onto the accounts.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Takes ownership of `account`, stamps it with this bank's name and
    /// appends it. No uniqueness check is performed.
    pub fn add_account(&mut self, mut account: Account) {
        account.set_bank(&self.name);
        debug!(person = account.person(), bank = %self.name, "account added");
        self.accounts.push(account);
    }

    /// First account whose person name matches, in insertion order.
    pub fn account_by_person(&self, person: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.person() == person)
    }

    /// Moves `amount` from `source` to `destination`: debit first, credit
    /// only if the debit succeeded. A failed debit propagates as-is and the
    /// destination is never credited. The accounts need not be held by any
    /// bank.
    pub fn transfer(
        source: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<(), AccountError> {
        source.debit(amount)?;
        destination.credit(amount);
        debug!(
            from = source.person(),
            to = destination.person(),
            %amount,
            "transfer applied"
        );
        Ok(())
    }
}
