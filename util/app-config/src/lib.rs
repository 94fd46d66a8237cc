//! ckb-txcodec command line arguments and config options.
mod app_config;
mod args;
pub mod cli;
mod exit_code;
#[cfg(test)]
mod tests;

pub use app_config::{AppConfig, EncoderConfig, LoggerConfig, OutputFormat};
pub use args::{EncodeArgs, Entity};
pub use exit_code::ExitCode;

use clap::ArgMatches;
use std::path::PathBuf;

/// The loaded configuration together with the chosen subcommand.
pub struct Setup {
    /// The subcommand name, see [`cli`] for the list.
    pub subcommand_name: String,
    /// Options from the config file, or the defaults when no file is given.
    pub config: AppConfig,
}

impl Setup {
    /// Loads the config file named by `--config`, if any.
    pub fn from_matches(cmd: &str, matches: &ArgMatches) -> Result<Setup, ExitCode> {
        let config = match matches.get_one::<PathBuf>(cli::ARG_CONFIG) {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        Ok(Setup {
            subcommand_name: cmd.to_string(),
            config,
        })
    }

    /// Collects the arguments of the `encode` subcommand.
    ///
    /// Command line options win over the config file.
    pub fn encode(self, matches: &ArgMatches) -> Result<EncodeArgs, ExitCode> {
        let entity = match matches.get_one::<String>(cli::ARG_ENTITY) {
            Some(entity) => entity.parse().map_err(|err| {
                eprintln!("{}", err);
                ExitCode::Cli
            })?,
            None => Entity::default(),
        };
        let output = match matches.get_one::<String>(cli::ARG_FORMAT) {
            Some(format) => format.parse().map_err(|err| {
                eprintln!("{}", err);
                ExitCode::Cli
            })?,
            None => self.config.encoder.output,
        };
        let input = matches
            .get_one::<PathBuf>(cli::ARG_INPUT)
            .filter(|path| path.as_os_str() != cli::STDIN)
            .cloned();

        Ok(EncodeArgs {
            entity,
            output,
            input,
            max_serialized_size: self.config.encoder.max_serialized_size,
        })
    }
}
