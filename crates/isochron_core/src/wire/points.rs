use crate::{
    coordinate::Coordinate,
    options::{travel_options::TravelOptions, travel_type::TravelType},
};

use super::wire_request::{
    WireAggregationInput, WireCar, WireFrame, WirePosition, WireSource, WireSpeed,
    WireSpeedTransit, WireTarget, WireTransit, WireTransportMode,
};

fn position(coordinate: &Coordinate) -> WirePosition {
    match coordinate.crs {
        Some(crs) if !coordinate.is_wgs84() => WirePosition::Projected {
            x: coordinate.x,
            y: coordinate.y,
            crs,
        },
        _ => WirePosition::LatLng {
            lat: coordinate.y,
            lng: coordinate.x,
        },
    }
}

fn walk_speed(options: &TravelOptions) -> WireSpeed {
    WireSpeed {
        speed: options.walk_speed,
        uphill: options.walk_uphill,
        downhill: options.walk_downhill,
    }
}

fn bike_speed(options: &TravelOptions) -> WireSpeed {
    WireSpeed {
        speed: options.bike_speed,
        uphill: options.bike_uphill,
        downhill: options.bike_downhill,
    }
}

fn transit(options: &TravelOptions) -> WireTransit {
    let frame = &options.transit_frame;
    WireTransit {
        frame: WireFrame {
            date: frame.date_as_number(),
            time: frame.time_as_seconds(),
            duration: frame.duration_as_seconds(),
        },
        max_transfers: options.max_transfers,
        max_walking_time_from_source: options.max_walking_time_from_source,
        max_walking_time_to_target: options.max_walking_time_to_target,
        recommendations: options.recommendations,
    }
}

pub(super) fn transport_mode(
    travel_type: TravelType,
    options: &TravelOptions,
) -> Option<WireTransportMode> {
    let mode = match travel_type {
        TravelType::Unspecified => return None,
        TravelType::Walk => WireTransportMode::Walk(walk_speed(options)),
        TravelType::Bike => WireTransportMode::Bike(bike_speed(options)),
        TravelType::Car => WireTransportMode::Car(WireCar {
            rush_hour: options.rush_hour,
        }),
        TravelType::Transit => WireTransportMode::Transit(transit(options)),
        TravelType::WalkTransit => WireTransportMode::WalkTransit(WireSpeedTransit {
            transit: transit(options),
            speed: walk_speed(options),
        }),
        TravelType::BikeTransit => WireTransportMode::BikeTransit(WireSpeedTransit {
            transit: transit(options),
            speed: bike_speed(options),
        }),
    };

    Some(mode)
}

pub(super) fn sources(options: &TravelOptions) -> Vec<WireSource<'_>> {
    options
        .sources
        .iter()
        .map(|source| WireSource {
            id: &source.id,
            position: position(source),
            tm: transport_mode(options.resolve_travel_type(source), options),
            reverse: options.reverse,
            aggregation_input_parameters: source
                .aggregation_input
                .filter(|input| !input.is_empty())
                .map(|input| WireAggregationInput {
                    factor: input.factor,
                    gravitation_attraction_strength: input.gravitation_attraction_strength,
                    gravitation_positive_influence: input.gravitation_positive_influence,
                }),
        })
        .collect()
}

pub(super) fn targets(options: &TravelOptions) -> Option<Vec<WireTarget<'_>>> {
    if options.targets.is_empty() {
        return None;
    }

    Some(
        options
            .targets
            .iter()
            .map(|target| WireTarget {
                id: &target.id,
                position: position(target),
            })
            .collect(),
    )
}
