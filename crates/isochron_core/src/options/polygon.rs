use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntersectionMode {
    #[default]
    Union,
    Intersection,
    Average,
    None,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PolygonSerializerType {
    #[default]
    Json,
    GeoJson,
}

/// Restricts generated polygons to the given geometry.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct IntersectionGeometry {
    /// GeoJSON geometry, passed through untouched
    pub geojson: serde_json::Value,
    pub crs: Option<i32>,
}
