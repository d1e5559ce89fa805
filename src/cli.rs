use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(short, long, default_value = "config.toml")]
    pub config_path: PathBuf,
    /// Contracts file to publish. Overrides `source.path` from the config.
    #[clap(short, long)]
    pub input: Option<PathBuf>,
}
