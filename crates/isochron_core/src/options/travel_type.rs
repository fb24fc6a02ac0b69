use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    #[default]
    Unspecified,
    Walk,
    Bike,
    Car,
    Transit,
    WalkTransit,
    BikeTransit,
}

impl TravelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelType::Unspecified => "unspecified",
            TravelType::Walk => "walk",
            TravelType::Bike => "bike",
            TravelType::Car => "car",
            TravelType::Transit => "transit",
            TravelType::WalkTransit => "walktransit",
            TravelType::BikeTransit => "biketransit",
        }
    }

    /// Returns `self` unless it is `Unspecified`, in which case `fallback` wins.
    pub fn or(self, fallback: TravelType) -> TravelType {
        match self {
            TravelType::Unspecified => fallback,
            travel_type => travel_type,
        }
    }
}

impl Display for TravelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or() {
        assert_eq!(TravelType::Unspecified.or(TravelType::Car), TravelType::Car);
        assert_eq!(TravelType::Bike.or(TravelType::Car), TravelType::Bike);
        assert_eq!(
            TravelType::Unspecified.or(TravelType::Unspecified),
            TravelType::Unspecified
        );
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        for travel_type in [
            TravelType::Walk,
            TravelType::Bike,
            TravelType::Car,
            TravelType::Transit,
            TravelType::WalkTransit,
            TravelType::BikeTransit,
        ] {
            let json = serde_json::to_string(&travel_type).unwrap();
            assert_eq!(json, format!("\"{}\"", travel_type.as_str()));
        }
    }
}
