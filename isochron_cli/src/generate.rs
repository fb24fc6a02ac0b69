use std::path::PathBuf;

use clap::Subcommand;
use isochron_core::options::travel_options::TravelOptions;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file for the options schema
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(TravelOptions);
    serde_json::to_string_pretty(&schema)
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = generate_json_schema()?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
