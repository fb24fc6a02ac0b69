use jiff::{
    SignedDuration,
    civil::{Date, Time},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Departure window for public transport requests.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitFrame {
    pub date: Option<Date>,
    pub time: Option<Time>,
    pub duration: Option<SignedDuration>,
}

impl TransitFrame {
    /// The date as the `yyyymmdd` integer the service expects.
    pub fn date_as_number(&self) -> Option<i32> {
        self.date.map(|date| {
            i32::from(date.year()) * 10_000 + i32::from(date.month()) * 100 + i32::from(date.day())
        })
    }

    /// The time as seconds since midnight.
    pub fn time_as_seconds(&self) -> Option<i32> {
        self.time.map(|time| {
            i32::from(time.hour()) * 3600 + i32::from(time.minute()) * 60 + i32::from(time.second())
        })
    }

    pub fn duration_as_seconds(&self) -> Option<i64> {
        self.duration.map(|duration| duration.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use super::*;

    #[test]
    fn test_frame_numbers() {
        let frame = TransitFrame {
            date: Some(date(2017, 2, 14)),
            time: Some(time(9, 30, 15, 0)),
            duration: Some(SignedDuration::from_mins(60)),
        };

        assert_eq!(frame.date_as_number(), Some(20170214));
        assert_eq!(frame.time_as_seconds(), Some(34215));
        assert_eq!(frame.duration_as_seconds(), Some(3600));
    }

    #[test]
    fn test_empty_frame() {
        let frame = TransitFrame::default();

        assert_eq!(frame.date_as_number(), None);
        assert_eq!(frame.time_as_seconds(), None);
        assert_eq!(frame.duration_as_seconds(), None);
    }
}
