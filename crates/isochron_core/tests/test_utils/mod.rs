use isochron_core::{
    coordinate::Coordinate,
    options::{travel_options::TravelOptions, travel_type::TravelType},
};

pub fn create_time_options() -> TravelOptions {
    let mut options = TravelOptions::default();
    options
        .add_source(Coordinate::new("id0", 10.64, -17.37).with_travel_type(TravelType::Car))
        .add_target(Coordinate::new("id0", -84.01, 41.81))
        .set_service("https://service.example.com/westcentraleurope/", "secret-key");
    options
}

/// Grid of `rows * cols` WGS84 points one hundredth of a degree apart, ids `{prefix}{n}`.
pub fn create_coordinate_grid(prefix: &str, rows: usize, cols: usize) -> Vec<Coordinate> {
    let mut coordinates = Vec::with_capacity(rows * cols);

    for y in 0..rows {
        for x in 0..cols {
            let id = format!("{}{}", prefix, coordinates.len());
            coordinates.push(Coordinate::new(
                id,
                13.0 + x as f64 * 0.01,
                52.0 + y as f64 * 0.01,
            ));
        }
    }

    coordinates
}
