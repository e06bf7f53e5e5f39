use std::fs::File;

use anyhow::{Context, Result};
use pocket_bank::bin_utils::Service;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected a file name as the first argument")?;
    let bank_name = args.next().unwrap_or_else(|| "Pocket Bank".to_owned());
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        bank_name,
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            match err {
                pocket_bank::bin_utils::InstructionError::AccountErr(_) => {
                    // balance shortfalls are expected outcomes, not input errors
                }
                err => eprintln!("Error at line {line}: {err}"),
            }
        }),
    };
    service.run()
}
