use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::io::config_io::load_config;

fn main() {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let log_guard = match ticklist::logging::init_logging() {
        Ok((_, guard)) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    let config = load_config(cli.config.as_deref());
    if let Err(e) = ticklist::tui::run(&cli.file, config) {
        tracing::error!("{}", e);
        drop(log_guard);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
