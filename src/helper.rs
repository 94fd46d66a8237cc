use ckb_txcodec_config::LoggerConfig;
use env_logger::{Builder, Env, WriteStyle};

/// The environment variable which overrides the configured filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Installs the `env_logger` backend behind the `ckb_logger` macros.
///
/// Records go to stderr so they never mix with the encoded output.
pub fn init_logger(config: &LoggerConfig) {
    let mut builder = Builder::new();
    match std::env::var(LOG_ENV) {
        Ok(_) => {
            builder.parse_env(Env::new().filter(LOG_ENV));
        }
        Err(_) => {
            if let Some(filter) = &config.filter {
                builder.parse_filters(&convert_compatible_crate_name(filter));
            }
        }
    }
    builder.write_style(if config.color {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    });
    if let Err(err) = builder.try_init() {
        eprintln!("Failed to initialize the logger: {}", err);
    }
}

// Crate names are written with `-` in Cargo.toml but log targets use `_`.
fn convert_compatible_crate_name(filter: &str) -> String {
    filter
        .split(',')
        .map(|directive| match directive.split_once('=') {
            Some((target, level)) => format!("{}={}", target.replace('-', "_"), level),
            None if directive.contains('-') => directive.replace('-', "_"),
            None => directive.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(",")
}
