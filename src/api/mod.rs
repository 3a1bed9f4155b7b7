pub mod sheet;
pub mod sheet_csv;
pub mod sheet_geojson;
pub mod sheet_index;

pub use sheet::{GeoCorners, Sheet, SheetRecord};
pub use sheet_csv::SheetsToCsv;
pub use sheet_geojson::SheetsToGeoJson;
pub use sheet_index::{SheetIndex, SheetSet};
