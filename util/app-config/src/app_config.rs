//! # ckb-txcodec AppConfig
//!
//! Every section and every option is optional, a missing one takes its default value.

use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, str::FromStr};

use super::ExitCode;

/// The whole config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Logger options.
    pub logger: LoggerConfig,
    /// Encoder options.
    pub encoder: EncoderConfig,
}

/// The logger options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// An optional string which is used to build [env_logger::Filter], `"info"` by default.
    ///
    /// `RUST_LOG` takes precedence when it is set. `None` leaves only errors enabled.
    ///
    /// [env_logger::Filter]: https://docs.rs/env_logger/*/env_logger/filter/struct.Filter.html
    pub filter: Option<String>,
    /// Colorize the output which was written into the stderr.
    pub color: bool,
}

impl LoggerConfig {
    /// The filter used when the config file does not set one.
    pub const DEFAULT_FILTER: &'static str = "info";
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            filter: Some(Self::DEFAULT_FILTER.to_owned()),
            color: !cfg!(windows),
        }
    }
}

/// The encoder options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// How the serialized bytes are written to stdout.
    pub output: OutputFormat,
    /// Serialized entities larger than this are rejected.
    pub max_serialized_size: usize,
}

impl EncoderConfig {
    /// The block size limit of the CKB mainnet, no transaction can be larger.
    pub const DEFAULT_MAX_SERIALIZED_SIZE: usize = 597_000;
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            output: OutputFormat::default(),
            max_serialized_size: Self::DEFAULT_MAX_SERIALIZED_SIZE,
        }
    }
}

/// The output encoding of the serialized bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `0x`-prefixed lowercase hex followed by a newline.
    #[default]
    Hex,
    /// The raw bytes.
    Binary,
}

impl OutputFormat {
    /// The names accepted by `--format`.
    pub const NAMES: [&'static str; 2] = ["hex", "binary"];

    /// The textual form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Binary => "binary",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "hex" => Ok(OutputFormat::Hex),
            "binary" => Ok(OutputFormat::Binary),
            _ => Err(format!(
                "Invalid output format {:?}, expected one of {}",
                name,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppConfig {
    /// Reads and parses a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<AppConfig, ExitCode> {
        let content = fs::read_to_string(path.as_ref()).map_err(|err| {
            eprintln!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                err
            );
            ExitCode::IO
        })?;
        Self::load_from_str(&content)
    }

    /// Parses config file content.
    pub fn load_from_str(content: &str) -> Result<AppConfig, ExitCode> {
        let config: AppConfig = toml::from_str(content)?;
        if config.encoder.max_serialized_size == 0 {
            eprintln!("Config Error: encoder.max_serialized_size must be positive");
            return Err(ExitCode::Config);
        }
        Ok(config)
    }
}
