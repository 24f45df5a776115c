use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tick", about = concat!("tick v", env!("CARGO_PKG_VERSION"), " - a terminal task list"), version)]
pub struct Cli {
    /// Task file to open (created on first save)
    #[arg(short = 'f', long = "file", default_value = "tasks.json")]
    pub file: PathBuf,

    /// Config file [default: <config dir>/ticklist/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,
}
