//! # zukaku-rs
//!
//! Hierarchical national base map sheet index (kokudo kihon zukaku) over
//! Japan's plane rectangular coordinate system zones.
//!
//! Each of the 13 zones carries a fixed 20×8 grid of 1:50000 sheets; every
//! 1:50000 sheet splits into a 10×10 grid of 1:5000 sheets, and every
//! 1:5000 sheet into four 1:2500 quadrants. Sheet codes follow the
//! published numbering convention (`09AA` → `09AA00` → `09AA001`), and
//! every sheet carries its geometry both in projected meters and as WGS84
//! latitude/longitude.
//!
//! There are two main entry points.
//!
//! ### 1. `SheetIndex` - Selection-Driven Drill-Down
//!
//! ```no_run
//! use zukaku_rs::SheetIndex;
//!
//! # fn main() -> Result<(), zukaku_rs::ZukakuError> {
//! let mut index = SheetIndex::new(9)?;
//! for sheet in index.level1().iter().take(3) {
//!     println!("{}: ({}, {})", sheet.code, sheet.lat(), sheet.lon());
//! }
//!
//! index.select_level1("09AA")?;
//! let quadrants = index.select_level2("09AA00")?;
//! assert_eq!(quadrants.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `SheetSet` - Direct Generation
//!
//! ```no_run
//! use zukaku_rs::{SheetSet, Transformer, Zone};
//!
//! # fn main() -> Result<(), zukaku_rs::ZukakuError> {
//! let zone = Zone::lookup(9)?;
//! let transformer = Transformer::for_zone(&zone)?;
//!
//! let sheets = SheetSet::level1(&zone, &transformer)?;
//! let finer = sheets.subdivide("09AA", &transformer)?;
//! assert_eq!(finer.len(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! Sets export as flat records (`SheetSet::records`), CSV
//! (`SheetSet::to_csv`) or GeoJSON (`SheetSet::to_geojson`) for an
//! external renderer: point markers at the coarser levels, filled
//! outlines at 1:2500.

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    GeoCorners, Sheet, SheetIndex, SheetRecord, SheetSet, SheetsToCsv, SheetsToGeoJson,
};
pub use core::{
    JGD2011_EPSG_OFFSET, LEVEL1_ORIGIN, Level, SheetFrame, WGS84_EPSG, ZONE_CENTERS, ZONE_COUNT,
    Zone, level1_frames, level2_frames, level3_frames,
};
pub use util::{Coordinate, Transformer, ZukakuError};

pub use geo_types;
