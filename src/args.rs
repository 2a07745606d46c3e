use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// INI file with [S3Info] credentials/bucket and [LocalInfo] base_path
    #[arg(short = 'c', long, value_name = "CONFIG_INI", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Print debug output, including S3 connection details
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Exit non-zero when any file failed to upload
    #[arg(long)]
    pub fail_on_error: bool,
}

impl Args {
    /// Logger verbosity: info by default, debug with -v
    pub fn verbosity(&self) -> u8 {
        1u8.saturating_add(self.verbose)
    }
}
