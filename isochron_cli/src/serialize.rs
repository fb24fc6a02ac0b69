use std::path::PathBuf;

use clap::Args;
use isochron_core::{options::travel_options::TravelOptions, wire::serializer::serialize};

use crate::options_file::load_options;

#[derive(Args)]
pub struct SerializeArgs {
    /// Options file (JSON)
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Print on a single line, byte for byte the POST body
    #[arg(long)]
    compact: bool,
}

fn render(options: &TravelOptions, compact: bool) -> anyhow::Result<String> {
    let request = serialize(options)?;

    let output = if compact {
        serde_json::to_string(&request)?
    } else {
        serde_json::to_string_pretty(&request)?
    };

    Ok(output)
}

pub fn run(args: SerializeArgs) -> anyhow::Result<()> {
    let options = load_options(&args.input)?;
    println!("{}", render(&options, args.compact)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use isochron_core::{
        coordinate::Coordinate,
        options::travel_type::TravelType,
        wire::serializer::to_json_string,
    };

    use super::*;

    fn options() -> TravelOptions {
        let mut options = TravelOptions {
            travel_type: TravelType::Car,
            travel_times: vec![600],
            ..Default::default()
        };
        options
            .add_source(Coordinate::new("home", 13.40, 52.52))
            .set_service("https://service.example.com/", "secret");
        options
    }

    #[test]
    fn test_compact_output_is_request_body() {
        let options = options();

        assert_eq!(
            render(&options, true).unwrap(),
            to_json_string(&options).unwrap()
        );
    }

    #[test]
    fn test_pretty_output_keeps_field_order() {
        let output = render(&options(), false).unwrap();

        let polygon = output.find("\"polygon\"").unwrap();
        let values = output.find("\"values\"").unwrap();
        let intersection_mode = output.find("\"intersectionMode\"").unwrap();
        let sources = output.find("\"sources\"").unwrap();
        let service_url = output.find("\"serviceUrl\"").unwrap();
        let service_key = output.find("\"serviceKey\"").unwrap();

        assert!(polygon < sources);
        assert!(values < intersection_mode);
        assert!(sources < service_url);
        assert!(service_url < service_key);
    }
}
