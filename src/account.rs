use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient funds")]
    InsufficientFunds,
}

/// A person's account: a display name plus an exact decimal balance.
///
/// The balance only changes through [`Account::debit`] and
/// [`Account::credit`], both of which operate on [`Decimal`] so fractional
/// balances like `1000.12345` survive arithmetic and formatting without
/// drift. The `bank` field is the name of the bank that holds the account,
/// stamped when the bank takes ownership; it is read for display only.
#[derive(Debug, Clone)]
pub struct Account {
    person: String,
    balance: Decimal,
    bank: Option<String>,
}

impl Account {
    /// The initial balance is accepted as-is, a negative opening balance
    /// included.
    pub fn new(person: impl Into<String>, balance: Decimal) -> Self {
        Self {
            person: person.into(),
            balance,
            bank: None,
        }
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn set_person(&mut self, person: impl Into<String>) {
        self.person = person.into();
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Name of the bank holding this account, if any.
    pub fn bank(&self) -> Option<&str> {
        self.bank.as_deref()
    }

    pub(crate) fn set_bank(&mut self, bank: &str) {
        self.bank = Some(bank.to_owned());
    }

    /// Subtracts `amount` from the balance. Fails when `amount` exceeds the
    /// current balance, leaving the balance untouched; debiting the full
    /// balance exactly is allowed and leaves zero.
    ///
    /// `amount` is expected to be non-negative; that precondition belongs to
    /// the instruction layer and is not re-checked here.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Adds `amount` to the balance. Total for any non-negative amount.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}

/// Accounts compare by `(person, balance)` so two independently constructed
/// accounts with the same content are equal. The bank back-reference is
/// deliberately excluded.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person && self.balance == other.balance
    }
}

impl Eq for Account {}
