use config::Config;
use log::warn;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode};

mod config;
mod entrypoint;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let (config, config_err) = match Config::from_env() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    // stdout carries only the messages, so all logging goes to stderr.
    CombinedLogger::init(vec![TermLogger::new(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .ok();

    if let Some(err) = config_err {
        warn!("{err}; falling back to {}", Config::default().log_level);
    }

    let stdout = std::io::stdout();
    entrypoint::run(&mut stdout.lock())
}
