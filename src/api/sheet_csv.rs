use crate::api::sheet::Sheet;
use crate::api::sheet_index::SheetSet;
use crate::util::error::ZukakuError;
use std::fs::File;
use std::path::Path;

/// CSV export of sheet records, one row per sheet in grid order.
///
/// Columns follow [`SheetRecord`](crate::SheetRecord); the eight corner
/// columns appear for 1:2500 sets only.
pub trait SheetsToCsv {
    fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), ZukakuError>;
}

impl SheetsToCsv for [Sheet] {
    fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), ZukakuError> {
        let file = File::create(path).map_err(|e| ZukakuError::IoError(e.to_string()))?;
        let mut writer = csv::Writer::from_writer(file);

        for sheet in self {
            writer
                .serialize(sheet.record())
                .map_err(|e| ZukakuError::CsvError(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| ZukakuError::CsvError(e.to_string()))?;
        Ok(())
    }
}

impl SheetSet {
    /// Write this set as a CSV file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use zukaku_rs::{SheetSet, Transformer, Zone};
    ///
    /// # fn main() -> Result<(), zukaku_rs::ZukakuError> {
    /// let zone = Zone::lookup(9)?;
    /// let transformer = Transformer::for_zone(&zone)?;
    /// let sheets = SheetSet::level1(&zone, &transformer)?;
    /// sheets.to_csv("zone9_50000.csv")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), ZukakuError> {
        self.sheets().to_csv(path)
    }
}
