pub mod constants;
pub mod grid;
pub mod zone;

pub use constants::{JGD2011_EPSG_OFFSET, LEVEL1_ORIGIN, WGS84_EPSG, ZONE_CENTERS, ZONE_COUNT};
pub use grid::{Level, SheetFrame, level1_frames, level2_frames, level3_frames};
pub use zone::Zone;
