//! This module could be a separate crate on its own, to bootstrap the bank
//! core within a binary, but it stays in the library so the integration
//! tests can drive the exact same pipeline.

use std::io::{Read, Write};

use anyhow::Result;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    account::{Account, AccountError},
    bank::Bank,
};
use csv_parser::{CsvInstructionParser, Instruction, InstructionKind};
use csv_printer::{Statement, print_statements};

pub mod csv_parser;
pub mod csv_printer;

/// Input validation lives here, not in the core: the core knows only about
/// insufficient funds, while malformed instructions (missing or negative
/// amounts, unknown people) are rejected before any account is touched.
#[derive(Debug, Error)]
pub enum InstructionError {
    #[error("Amount is required for {op:?}")]
    AmountRequired { op: InstructionKind },
    #[error("Amount must not be negative for {op:?}")]
    NegativeAmount { op: InstructionKind },
    #[error("A counterparty is required for {op:?}")]
    CounterpartyRequired { op: InstructionKind },
    #[error("No account for `{person}`")]
    UnknownAccount { person: String },
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub struct Service<'w, R, W: 'w> {
    pub bank_name: String,
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, InstructionError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvInstructionParser::new(self.input);

        let mut bank = Bank::new(self.bank_name);

        for (line, instruction) in parser {
            if let Err(err) = apply_instruction(&mut bank, instruction) {
                (self.error_printer)(line, err);
            }
        }

        print_statements(
            self.output,
            bank.accounts().iter().map(|acc| Statement {
                person: acc.person().to_owned(),
                balance: acc.balance(),
                bank: acc.bank().unwrap_or_default().to_owned(),
            }),
        )
    }
}

fn apply_instruction(bank: &mut Bank, instruction: Instruction) -> Result<(), InstructionError> {
    let op = instruction.op;
    let amount = require_amount(&instruction)?;
    match op {
        InstructionKind::Open => {
            debug!(person = %instruction.person, %amount, "opening account");
            bank.add_account(Account::new(instruction.person, amount));
        }
        InstructionKind::Deposit => {
            let idx = find_account(bank, &instruction.person)?;
            bank.accounts_mut()[idx].credit(amount);
        }
        InstructionKind::Withdraw => {
            let idx = find_account(bank, &instruction.person)?;
            bank.accounts_mut()[idx].debit(amount)?;
        }
        InstructionKind::Transfer => {
            let counterparty = instruction
                .counterparty
                .as_deref()
                .ok_or(InstructionError::CounterpartyRequired { op })?;
            let from = find_account(bank, &instruction.person)?;
            let to = find_account(bank, counterparty)?;
            transfer_between(bank, from, to, amount)?;
        }
    }
    Ok(())
}

fn require_amount(instruction: &Instruction) -> Result<Decimal, InstructionError> {
    let op = instruction.op;
    let Some(amount) = instruction.amount else {
        return Err(InstructionError::AmountRequired { op });
    };
    if amount < Decimal::ZERO {
        return Err(InstructionError::NegativeAmount { op });
    }
    Ok(amount)
}

fn find_account(bank: &Bank, person: &str) -> Result<usize, InstructionError> {
    bank.accounts()
        .iter()
        .position(|acc| acc.person() == person)
        .ok_or_else(|| InstructionError::UnknownAccount {
            person: person.to_owned(),
        })
}

fn transfer_between(
    bank: &mut Bank,
    from: usize,
    to: usize,
    amount: Decimal,
) -> Result<(), AccountError> {
    let accounts = bank.accounts_mut();
    if from == to {
        // self-transfer: both guards still run, net effect is zero
        let account = &mut accounts[from];
        account.debit(amount)?;
        account.credit(amount);
        return Ok(());
    }
    let (head, tail) = accounts.split_at_mut(from.max(to));
    let (source, destination) = if from < to {
        (&mut head[from], &mut tail[0])
    } else {
        (&mut tail[0], &mut head[to])
    };
    Bank::transfer(source, destination, amount)
}
