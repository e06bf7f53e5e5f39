use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstructionKind {
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Debug, Deserialize)]
pub struct Instruction {
    pub op: InstructionKind,
    pub person: String,
    pub counterparty: Option<String>,
    pub amount: Option<Decimal>,
}

/// Parses an instruction list in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvInstructionParser<R> {
    iter: DeserializeRecordsIntoIter<R, Instruction>,
}

impl<R> CsvInstructionParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvInstructionParser<R>
where
    R: Read,
{
    type Item = (u64, Instruction);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
