use crate::core::constants::{JGD2011_EPSG_OFFSET, ZONE_CENTERS, ZONE_COUNT};
use crate::util::error::ZukakuError;
use geo_types::Point;

/// One of the 13 plane rectangular coordinate system zones.
///
/// The projected CRS is a pure function of the zone number (EPSG 6668 + n
/// under JGD2011); the display center is a fixed framing hint for map UIs.
///
/// # Example
///
/// ```
/// use zukaku_rs::Zone;
///
/// # fn main() -> Result<(), zukaku_rs::ZukakuError> {
/// let zone = Zone::lookup(9)?;
/// assert_eq!(zone.epsg, 6677);
/// assert_eq!(zone.crs_code(), "EPSG:6677");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    /// Zone number (1-13).
    pub number: u8,
    /// EPSG code of the zone's projected CRS.
    pub epsg: i32,
    /// Approximate center for initial map framing, as a `(lon, lat)` point.
    pub display_center: Point<f64>,
}

impl Zone {
    /// Look up a zone by number, failing outside 1-13.
    pub fn lookup(number: u8) -> Result<Zone, ZukakuError> {
        if number < 1 || number > ZONE_COUNT {
            return Err(ZukakuError::InvalidZone(number));
        }

        let (lat, lon) = ZONE_CENTERS[number as usize - 1];
        Ok(Zone {
            number,
            epsg: JGD2011_EPSG_OFFSET + number as i32,
            display_center: Point::new(lon, lat),
        })
    }

    /// The zone's projected CRS as an `EPSG:` authority string.
    pub fn crs_code(&self) -> String {
        format!("EPSG:{}", self.epsg)
    }
}
