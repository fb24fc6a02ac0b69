use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use isochron_core::options::travel_options::TravelOptions;
use tracing::debug;

pub const SERVICE_URL_ENV: &str = "ISOCHRON_SERVICE_URL";
pub const SERVICE_KEY_ENV: &str = "ISOCHRON_SERVICE_KEY";

/// Reads options from a JSON file. Service URL and key fall back to the
/// environment when the file does not set them.
pub fn load_options(path: &Path) -> anyhow::Result<TravelOptions> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut options: TravelOptions = serde_json::from_reader(reader)
        .with_context(|| format!("invalid options in {}", path.display()))?;

    apply_environment(&mut options, |key| std::env::var(key).ok());

    debug!(
        sources = options.sources.len(),
        targets = options.targets.len(),
        travel_type = %options.travel_type,
        "Loaded options from {}",
        path.display()
    );

    Ok(options)
}

fn apply_environment(options: &mut TravelOptions, var: impl Fn(&str) -> Option<String>) {
    if options.service_url.is_none() {
        options.service_url = var(SERVICE_URL_ENV);
    }

    if options.service_key.is_none() {
        options.service_key = var(SERVICE_KEY_ENV);
    }
}
