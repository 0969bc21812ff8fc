use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes an order file with the standard header followed by `rows`.
pub fn orders_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "pizza, toppings, payment")?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

/// Writes a stock override file.
pub fn stock_file(levels: &[(&str, u32)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[stock]")?;
    for (item, level) in levels {
        writeln!(file, "{} = {}", item, level)?;
    }
    file.flush()?;
    Ok(file)
}
