use crate::core::constants::WGS84_EPSG;
use crate::core::zone::Zone;
use crate::util::error::ZukakuError;
use geo_types::Point;
use proj::Proj;

pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

/// Forward/inverse transform between one zone's plane rectangular CRS and WGS84.
///
/// CRS parameter resolution happens once, at construction; the resulting
/// pipelines are read-only and shared across every sheet generated for the
/// zone. Coordinates are axis-normalized: projected input is `(x, y)` in
/// meters east/north of the zone origin, geographic output is `(lon, lat)`.
///
/// # Example
///
/// ```
/// use zukaku_rs::{Transformer, Zone};
///
/// # fn main() -> Result<(), zukaku_rs::ZukakuError> {
/// let zone = Zone::lookup(9)?;
/// let transformer = Transformer::for_zone(&zone)?;
/// let geo = transformer.forward(&(0.0, 0.0))?;
/// assert!((geo.y() - 36.0).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
pub struct Transformer {
    zone_number: u8,
    forward: Proj,
    inverse: Proj,
}

impl Transformer {
    /// Build the forward and inverse pipelines for one zone.
    pub fn for_zone(zone: &Zone) -> Result<Self, ZukakuError> {
        let geographic = format!("EPSG:{}", WGS84_EPSG);
        let forward = Proj::new_known_crs(&zone.crs_code(), &geographic, None)
            .map_err(|e| ZukakuError::TransformError(e.to_string()))?;
        let inverse = Proj::new_known_crs(&geographic, &zone.crs_code(), None)
            .map_err(|e| ZukakuError::TransformError(e.to_string()))?;

        Ok(Self {
            zone_number: zone.number,
            forward,
            inverse,
        })
    }

    /// Projected `(x, y)` in meters to a geographic `(lon, lat)` point.
    pub fn forward<C: Coordinate>(&self, coord: &C) -> Result<Point<f64>, ZukakuError> {
        let (lon, lat) = self
            .forward
            .convert((coord.x(), coord.y()))
            .map_err(|e| ZukakuError::TransformError(e.to_string()))?;
        Ok(Point::new(lon, lat))
    }

    /// Geographic `(lon, lat)` back to projected `(x, y)` meters.
    pub fn inverse<C: Coordinate>(&self, coord: &C) -> Result<Point<f64>, ZukakuError> {
        let (x, y) = self
            .inverse
            .convert((coord.x(), coord.y()))
            .map_err(|e| ZukakuError::TransformError(e.to_string()))?;
        Ok(Point::new(x, y))
    }

    /// Number of the zone this transformer was built for.
    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_origin_maps_to_projection_origin() -> Result<(), ZukakuError> {
        // Zone IX origin is 36°N 139°50'E.
        let zone = Zone::lookup(9)?;
        let transformer = Transformer::for_zone(&zone)?;

        let geo = transformer.forward(&(0.0, 0.0))?;
        assert!((geo.x() - (139.0 + 50.0 / 60.0)).abs() < 1e-6);
        assert!((geo.y() - 36.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_roundtrip() -> Result<(), ZukakuError> {
        let zone = Zone::lookup(9)?;
        let transformer = Transformer::for_zone(&zone)?;

        let geo = transformer.forward(&(-140000.0, 285000.0))?;
        let back = transformer.inverse(&geo)?;

        assert!((back.x() - (-140000.0)).abs() < 0.001);
        assert!((back.y() - 285000.0).abs() < 0.001);
        Ok(())
    }

    #[test]
    fn test_forward_is_monotonic() -> Result<(), ZukakuError> {
        let zone = Zone::lookup(9)?;
        let transformer = Transformer::for_zone(&zone)?;

        let origin = transformer.forward(&(0.0, 0.0))?;
        let north = transformer.forward(&(0.0, 10000.0))?;
        let east = transformer.forward(&(10000.0, 0.0))?;

        assert!(north.y() > origin.y());
        assert!(east.x() > origin.x());
        Ok(())
    }

    #[test]
    fn test_point_and_tuple_same_result() -> Result<(), ZukakuError> {
        let zone = Zone::lookup(9)?;
        let transformer = Transformer::for_zone(&zone)?;

        let from_tuple = transformer.forward(&(12000.0, -34000.0))?;
        let from_point = transformer.forward(&Point::new(12000.0, -34000.0))?;

        assert_eq!(from_tuple.x(), from_point.x());
        assert_eq!(from_tuple.y(), from_point.y());
        Ok(())
    }

    #[test]
    fn test_unresolvable_crs() {
        let bogus = Zone {
            number: 9,
            epsg: 999999,
            display_center: Point::new(0.0, 0.0),
        };
        let result = Transformer::for_zone(&bogus);
        assert!(matches!(result, Err(ZukakuError::TransformError(_))));
    }

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (100.0, 200.0);
        assert_eq!(tuple.x(), 100.0);
        assert_eq!(tuple.y(), 200.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(100.0, 200.0);
        assert_eq!(point.x(), 100.0);
        assert_eq!(point.y(), 200.0);
    }
}
