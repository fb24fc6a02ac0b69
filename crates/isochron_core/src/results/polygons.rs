use geojson::FeatureCollection;

#[derive(Debug, Clone, PartialEq)]
pub struct TravelTimePolygon {
    pub travel_time: i32,
    pub area: Option<f64>,
    pub polygon: geo_types::Polygon<f64>,
}

/// Polygons of one source, or of all sources when they were merged by the
/// intersection mode.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePolygons {
    pub source_id: Option<String>,
    pub polygons: Vec<TravelTimePolygon>,
}

impl SourcePolygons {
    pub fn for_travel_time(&self, travel_time: i32) -> impl Iterator<Item = &TravelTimePolygon> {
        self.polygons
            .iter()
            .filter(move |polygon| polygon.travel_time == travel_time)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PolygonPayload {
    Json(Vec<SourcePolygons>),
    GeoJson(FeatureCollection),
}
