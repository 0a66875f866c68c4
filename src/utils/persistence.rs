use std::{fs, path::Path};

use crate::{errors::LedgerError, input::YearInput};

/// Writes the year input to disk atomically by staging to a temporary file.
pub fn save_year_to_file(input: &YearInput, path: &Path) -> Result<(), LedgerError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(input)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a year input from disk, returning structured errors on failure.
pub fn load_year_from_file(path: &Path) -> Result<YearInput, LedgerError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
