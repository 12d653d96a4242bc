use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;

use crate::{bytes::BYTES_PER_MB, cli::Args};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: String,
    pub threshold_mb: u64,
}

impl Config {
    pub const DEFAULT_DIR: &'static str = ".";
    pub const DEFAULT_THRESHOLD_MB: u64 = 100;

    /// Parses the full argument list, program name included.
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }

    /// Saturates, since no file can be larger than `u64::MAX` anyway.
    pub fn threshold_bytes(&self) -> u64 {
        self.threshold_mb.saturating_mul(BYTES_PER_MB)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: Self::DEFAULT_DIR.to_string(),
            threshold_mb: Self::DEFAULT_THRESHOLD_MB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let config = Config::parse(["bigfiles"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dir, ".");
        assert_eq!(config.threshold_mb, 100);
    }

    #[test]
    fn one_argument_sets_threshold() {
        let config = Config::parse(["bigfiles", "250"]).unwrap();
        assert_eq!(config.threshold_mb, 250);
        assert_eq!(config.dir, ".");
    }

    #[test]
    fn two_arguments_set_threshold_and_dir() {
        let config = Config::parse(["bigfiles", "5", "/var/log"]).unwrap();
        assert_eq!(config.threshold_mb, 5);
        assert_eq!(config.dir, "/var/log");
    }

    #[test]
    fn directory_is_kept_verbatim() {
        let config = Config::parse(["bigfiles", "1", "./no/such/../dir/"]).unwrap();
        assert_eq!(config.dir, "./no/such/../dir/");
    }

    #[test]
    fn rejects_non_integer_threshold() {
        let err = Config::parse(["bigfiles", "abc"]).unwrap_err();
        assert!(err.to_string().contains("invalid digit"));

        assert!(Config::parse(["bigfiles", "1.5"]).is_err());
        assert!(Config::parse(["bigfiles", ""]).is_err());
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = Config::parse(["bigfiles", "-5"]).unwrap_err();
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn rejects_extra_arguments_and_flags() {
        assert!(Config::parse(["bigfiles", "1", ".", "extra"]).is_err());
        assert!(Config::parse(["bigfiles", "--help"]).is_err());
    }

    #[test]
    fn threshold_is_converted_to_bytes() {
        let config = Config::parse(["bigfiles", "100"]).unwrap();
        assert_eq!(config.threshold_bytes(), 100 * 1024 * 1024);

        let zero = Config::parse(["bigfiles", "0"]).unwrap();
        assert_eq!(zero.threshold_bytes(), 0);

        let huge = Config {
            threshold_mb: u64::MAX,
            ..Config::default()
        };
        assert_eq!(huge.threshold_bytes(), u64::MAX);
    }
}
