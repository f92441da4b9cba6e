use crate::error::CliError;
use log::{debug, error};
use std::fs;
use std::path::Path;
use thompson::batch::{self, BatchDriver};

/// Batch mode (spec §6): read a JSON array of `{regex, strings}` records,
/// compile-and-match each, and write the verdicts back out in the same
/// order. A schema violation is logged and treated as an empty batch
/// (spec §6: "schema violation yields an empty batch and a diagnostic")
/// rather than aborting the process.
pub fn run(input: &Path, output: &Path, parallel: bool) -> Result<(), CliError> {
    let raw = fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let records = match batch::read_batch(&raw) {
        Ok(records) => records,
        Err(e) => {
            error!(
                "batch input {} does not match the expected schema: {e}",
                input.display()
            );
            Vec::new()
        }
    };
    debug!(
        "loaded {} batch record(s) from {}",
        records.len(),
        input.display()
    );

    let driver = if parallel {
        BatchDriver::parallel()
    } else {
        BatchDriver::new()
    };
    let results = driver.run(&records);

    let json = batch::write_batch(&results);
    fs::write(output, json).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    debug!("wrote {} result(s) to {}", results.len(), output.display());
    Ok(())
}
