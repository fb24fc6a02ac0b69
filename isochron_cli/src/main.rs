use clap::{Parser, Subcommand};

use crate::{generate::GenerateSubcommands, request::RequestArgs, serialize::SerializeArgs};

mod generate;
mod options_file;
mod request;
mod serialize;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the request body built from an options file
    Serialize {
        #[command(flatten)]
        args: SerializeArgs,
    },
    /// Send an options file to the service and print the result
    #[command(visible_alias = "r")]
    Request {
        #[command(flatten)]
        args: RequestArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Serialize { args }) => serialize::run(args)?,
        Some(Commands::Request { args }) => request::run(args).await?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
