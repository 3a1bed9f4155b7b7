use crate::api::sheet::Sheet;
use crate::api::sheet_index::SheetSet;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

/// GeoJSON export of sheets, matching how renderers draw them: point
/// features at 1:50000 and 1:5000, polygon outlines at 1:2500.
pub trait SheetsToGeoJson {
    fn to_feature_collection(&self) -> FeatureCollection;
}

impl SheetsToGeoJson for [Sheet] {
    fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.iter().map(sheet_to_feature).collect(),
            foreign_members: None,
        }
    }
}

impl SheetSet {
    /// This set as a GeoJSON `FeatureCollection`.
    pub fn to_geojson(&self) -> FeatureCollection {
        self.sheets().to_feature_collection()
    }
}

fn sheet_to_feature(sheet: &Sheet) -> Feature {
    let geometry = match sheet.to_polygon() {
        Some(polygon) => Geometry::from(&polygon),
        None => Geometry::new(Value::Point(vec![sheet.lon(), sheet.lat()])),
    };

    let mut properties = JsonObject::new();
    properties.insert("code".to_string(), sheet.code.clone().into());
    properties.insert("level".to_string(), sheet.level.denominator().into());

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
