use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Only report files larger than this many megabytes
    #[arg(
        value_name = "THRESHOLD_MB",
        default_value_t = Config::DEFAULT_THRESHOLD_MB,
        allow_negative_numbers = true
    )]
    pub threshold_mb: u64,

    /// Directory to scan
    #[arg(value_name = "DIRECTORY", default_value = Config::DEFAULT_DIR)]
    pub dir: String,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(Config {
            dir: args.dir,
            threshold_mb: args.threshold_mb,
        })
    }
}
