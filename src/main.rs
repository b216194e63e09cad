use clap::Parser;
use morse::LogLevel;
use morse::core::config::{self, CliOverrides, MorseConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "morse", about = "Interactive English ↔ Morse code translator")]
struct Args {
    /// Config file to use instead of ~/.morse/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Log file location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Skip the greeting line
    #[arg(long)]
    no_banner: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("{e}; using defaults");
        MorseConfig::default()
    });
    let cli = CliOverrides {
        log_level: args.log_level,
        log_file: args.log_file,
        no_banner: args.no_banner,
    };
    let resolved = config::resolve(&file_config, &cli, |key| std::env::var(key).ok());
    for warning in &resolved.warnings {
        eprintln!("{warning}");
    }

    // Initialize file logger - stdout belongs to the translator
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = resolved.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level.to_level_filter(), log_config, log_file);
    }

    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }
    log::info!("Morse starting up with config: {:?}", resolved);

    morse::repl::run(resolved)
}
