use anyhow::Result;
use healthpredict::cli::{self, Commands};
use healthpredict::commands;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Predict {
            input,
            sample,
            format,
            output,
            config,
            preset,
            verbosity: _,
        } => commands::handle_predict(commands::PredictConfig {
            input,
            sample,
            format,
            output,
            config,
            preset,
        }),
        Commands::Init { path, force } => commands::init_config(&path, force),
        Commands::CheckConfig { path } => commands::check_config(&path),
    }
}

// RUST_LOG still wins when set
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
