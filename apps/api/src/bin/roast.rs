use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roast_api::client::{GenerateController, HttpGenerateApi, Phase};
use roast_api::models::generation::{Language, Mode, Tone};

/// Ask a running roast-api for one roast or compliment.
#[derive(Parser, Debug)]
#[command(name = "roast", version, about)]
struct Cli {
    /// Who the line is about
    name: String,

    #[arg(long, value_enum, default_value_t = Mode::Roast)]
    mode: Mode,

    #[arg(long, value_enum, default_value_t = Tone::Normal)]
    tone: Tone,

    #[arg(long, value_enum, default_value_t = Language::Hinglish)]
    language: Language,

    /// Free-text traits, e.g. "always late, overthinker"
    #[arg(long, default_value = "")]
    traits: String,

    #[arg(long, default_value = "")]
    inside_joke: String,

    #[arg(long, default_value = "")]
    relationship: String,

    /// Base URL of the API server
    #[arg(long, env = "ROAST_SERVER", default_value = "http://localhost:5000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roast_api=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpGenerateApi::new(&cli.server)?;

    let mut controller = GenerateController::new();
    controller.set_mode(cli.mode);
    controller.set_tone(cli.tone);
    controller.set_language(cli.language);
    controller.set_name(cli.name);
    controller.set_traits(cli.traits);
    controller.set_inside_joke(cli.inside_joke);
    controller.set_relationship(cli.relationship);

    controller.generate(&api).await;

    match controller.phase() {
        Phase::Result => {
            println!("{}", controller.output());
            Ok(ExitCode::SUCCESS)
        }
        Phase::Error => {
            eprintln!("{}", controller.error());
            Ok(ExitCode::FAILURE)
        }
        Phase::Idle | Phase::Loading => {
            eprintln!("Enter a name first.");
            Ok(ExitCode::from(2))
        }
    }
}
