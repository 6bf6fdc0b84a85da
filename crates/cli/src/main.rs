use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid4::Uuid;

#[derive(Parser)]
#[command(name = "uuid4")]
#[command(about = "Generate, format and parse RFC 4122 version 4 UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random UUID
    New,
    /// Parse a UUID and print it in canonical form
    Parse {
        /// UUID text, with or without hyphens, in any case
        input: String,
        /// Print 32 hex digits without hyphens
        #[arg(long)]
        simple: bool,
    },
    /// Parse a UUID and describe its version and variant
    Inspect {
        /// UUID text, with or without hyphens, in any case
        input: String,
    },
}

/// Entry point for the `uuid4` command line tool.
///
/// Logs go to stderr and are filtered by `RUST_LOG` (default `uuid4_cli=info`). A `.env` file
/// in the working directory is loaded first if present.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("uuid4_cli=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::New) => println!("{}", new_uuid()?),
        Some(Commands::Parse { input, simple }) => println!("{}", parse_uuid(&input, simple)?),
        Some(Commands::Inspect { input }) => println!("{}", inspect_uuid(&input)?),
        None => println!("Use 'uuid4 --help' for commands"),
    }

    Ok(())
}

fn new_uuid() -> anyhow::Result<String> {
    let uuid = Uuid::new_v4()?;
    tracing::debug!(%uuid, "generated UUID");
    Ok(uuid.to_string())
}

fn parse_uuid(input: &str, simple: bool) -> anyhow::Result<String> {
    tracing::debug!(input, simple, "parsing UUID");
    let uuid = Uuid::parse(input).with_context(|| format!("could not parse '{}'", input))?;

    if simple {
        Ok(uuid.simple().to_string())
    } else {
        Ok(uuid.to_string())
    }
}

fn inspect_uuid(input: &str) -> anyhow::Result<String> {
    tracing::debug!(input, "inspecting UUID");
    let uuid = Uuid::parse(input).with_context(|| format!("could not parse '{}'", input))?;

    Ok(format!(
        "uuid: {}\nversion: {}\nrfc4122 variant: {}\nnil: {}",
        uuid,
        uuid.version(),
        uuid.is_rfc4122_variant(),
        uuid.is_nil()
    ))
}
