use super::Table;
use crate::error::{Error, Result};

/// Spreadsheet applications only detect UTF-8 CSV with a byte-order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV with a header row followed by one row per record.
pub(super) fn render(table: &Table) -> Result<Vec<u8>> {
    let mut buf = UTF8_BOM.to_vec();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(Error::Io)?;
    }
    Ok(buf)
}
