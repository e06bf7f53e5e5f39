use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

/// One output row per account: exact balance plus the holding bank's name.
#[derive(Debug, Serialize)]
pub struct Statement {
    pub person: String,
    pub balance: Decimal,
    pub bank: String,
}

pub fn print_statements<W>(
    output: &mut W,
    statements: impl Iterator<Item = Statement>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for statement in statements {
        if let Err(err) = writer.serialize(statement) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
