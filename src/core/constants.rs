/// Number of plane rectangular coordinate system zones handled.
pub const ZONE_COUNT: u8 = 13;

/// EPSG code offset for the JGD2011 plane rectangular zones (zone n is EPSG 6668 + n).
pub const JGD2011_EPSG_OFFSET: i32 = 6668;

/// EPSG code of the geographic CRS used for output coordinates.
pub const WGS84_EPSG: i32 = 4326;

/// Northwest origin of the 1:50000 sheet grid, in meters from the zone origin.
pub const LEVEL1_ORIGIN: (f64, f64) = (-160_000.0, 300_000.0);

/// Approximate display center (lat, lon) per zone, indexed by zone number minus one.
///
/// Cartographic framing hints only; sheet coordinates always come from the
/// grid arithmetic, never from this table.
pub const ZONE_CENTERS: [(f64, f64); 13] = [
    (33.0, 129.5),
    (33.0, 131.0),
    (36.0, 132.17),
    (33.0, 133.5),
    (36.0, 134.33),
    (36.0, 136.0),
    (36.0, 137.17),
    (36.0, 138.5),
    (36.0, 139.83),
    (40.0, 140.83),
    (44.0, 140.25),
    (44.0, 142.25),
    (44.0, 144.25),
];
