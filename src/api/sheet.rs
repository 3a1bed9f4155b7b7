use crate::core::grid::{Level, SheetFrame};
use crate::util::coord::Transformer;
use crate::util::error::ZukakuError;
use geo_types::{Coord, LineString, Point, Polygon, Rect};
use serde::Serialize;

/// Geographic corners of a 1:2500 sheet, in `nw, ne, se, sw` order.
///
/// Points are `(lon, lat)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCorners {
    pub nw: Point<f64>,
    pub ne: Point<f64>,
    pub se: Point<f64>,
    pub sw: Point<f64>,
}

/// One map sheet at one scale level.
///
/// Projected coordinates (`nw_corner`, `center`) are meters in the zone's
/// plane rectangular CRS; `geo_center` is the image of `center` under the
/// zone's forward transform, as a `(lon, lat)` point. The four geographic
/// corners are carried only at 1:2500, where sheets are rendered as
/// outlines rather than point markers.
///
/// # Example
///
/// ```
/// use zukaku_rs::{SheetSet, Transformer, Zone};
///
/// # fn main() -> Result<(), zukaku_rs::ZukakuError> {
/// let zone = Zone::lookup(9)?;
/// let transformer = Transformer::for_zone(&zone)?;
/// let sheets = SheetSet::level1(&zone, &transformer)?;
///
/// let sheet = sheets.find_by_code("09AA")?;
/// println!("{}: ({}, {})", sheet.code, sheet.lat(), sheet.lon());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Hierarchical sheet code, e.g. `09AA`, `09AA00`, `09AA001`.
    pub code: String,
    /// Scale level of this sheet.
    pub level: Level,
    /// Northwest corner in projected meters.
    pub nw_corner: Point<f64>,
    /// Center in projected meters.
    pub center: Point<f64>,
    /// Center as a geographic `(lon, lat)` point.
    pub geo_center: Point<f64>,
    /// Geographic corners, populated for 1:2500 sheets only.
    pub geo_corners: Option<GeoCorners>,
}

impl Sheet {
    /// Attach geographic coordinates to a projected frame.
    ///
    /// Fails if any forward transform fails; no partial sheet is produced.
    pub(crate) fn from_frame(
        frame: SheetFrame,
        transformer: &Transformer,
    ) -> Result<Self, ZukakuError> {
        let center = frame.center();
        let geo_center = transformer.forward(&center)?;

        let geo_corners = match frame.level {
            Level::L2500 => {
                let [nw, ne, se, sw] = frame.corners();
                Some(GeoCorners {
                    nw: transformer.forward(&nw)?,
                    ne: transformer.forward(&ne)?,
                    se: transformer.forward(&se)?,
                    sw: transformer.forward(&sw)?,
                })
            }
            _ => None,
        };

        Ok(Self {
            code: frame.code,
            level: frame.level,
            nw_corner: frame.nw_corner,
            center,
            geo_center,
            geo_corners,
        })
    }

    /// Latitude of the sheet center in degrees.
    pub fn lat(&self) -> f64 {
        self.geo_center.y()
    }

    /// Longitude of the sheet center in degrees.
    pub fn lon(&self) -> f64 {
        self.geo_center.x()
    }

    /// Projected bounding rectangle of the sheet.
    pub fn rect(&self) -> Rect<f64> {
        self.frame().rect()
    }

    /// The sheet's geographic outline, for 1:2500 sheets.
    ///
    /// Returns a closed ring through `nw, ne, se, sw`; `None` at coarser
    /// levels, which carry no geographic corners.
    pub fn to_polygon(&self) -> Option<Polygon<f64>> {
        self.geo_corners.map(|corners| {
            let ring: Vec<Coord<f64>> = [corners.nw, corners.ne, corners.se, corners.sw, corners.nw]
                .iter()
                .map(|p| Coord { x: p.x(), y: p.y() })
                .collect();
            Polygon::new(LineString::from(ring), vec![])
        })
    }

    /// The flat record emitted to renderers.
    pub fn record(&self) -> SheetRecord {
        SheetRecord {
            code: self.code.clone(),
            level: self.level.denominator(),
            nw_corner_x: self.nw_corner.x(),
            nw_corner_y: self.nw_corner.y(),
            center_x: self.center.x(),
            center_y: self.center.y(),
            geo_center_lat: self.lat(),
            geo_center_lon: self.lon(),
            nw_lat: self.geo_corners.map(|c| c.nw.y()),
            nw_lon: self.geo_corners.map(|c| c.nw.x()),
            ne_lat: self.geo_corners.map(|c| c.ne.y()),
            ne_lon: self.geo_corners.map(|c| c.ne.x()),
            se_lat: self.geo_corners.map(|c| c.se.y()),
            se_lon: self.geo_corners.map(|c| c.se.x()),
            sw_lat: self.geo_corners.map(|c| c.sw.y()),
            sw_lon: self.geo_corners.map(|c| c.sw.x()),
        }
    }

    /// The projected frame this sheet was generated from.
    pub(crate) fn frame(&self) -> SheetFrame {
        SheetFrame {
            code: self.code.clone(),
            level: self.level,
            nw_corner: self.nw_corner,
        }
    }
}

/// Flat per-sheet record: one marker (or one outline) for the renderer.
///
/// Corner fields are present for 1:2500 sheets only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetRecord {
    pub code: String,
    /// Scale denominator (50000, 5000 or 2500).
    pub level: u32,
    pub nw_corner_x: f64,
    pub nw_corner_y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub geo_center_lat: f64,
    pub geo_center_lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nw_lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ne_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ne_lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_lon: Option<f64>,
}
