//! Entry point for the stdio template function host.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dict_i18n::I18n;
use dict_i18n::config::{
    I18nSettings,
    load_from_path,
};
use dict_i18n::server::Server;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Serve `i18nTranslate` calls as JSON lines over stdin/stdout
#[derive(Debug, Parser)]
#[command(version, about)]
struct Arguments {
    /// Config file: JSON, or an `i18n { ... }` block
    #[arg(short, long, conflicts_with = "dict_file")]
    config: Option<PathBuf>,

    /// Dictionary file to load
    #[arg(short, long)]
    dict_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let arguments = Arguments::parse();

    // stdout carries responses, logs go to stderr
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let settings = match arguments.config {
        Some(path) => match load_from_path(&path) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::error!(config = %path.display(), "Failed to load config: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => I18nSettings { dict_file: arguments.dict_file },
    };

    let mut extension = I18n::new(settings);
    if let Err(error) = extension.provision() {
        tracing::error!("{error}");
        return ExitCode::FAILURE;
    }

    let server = Server::new(extension.template_functions());
    match server.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Server stopped: {error}");
            ExitCode::FAILURE
        }
    }
}
