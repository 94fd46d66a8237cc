use std::path::PathBuf;

use crate::cli::*;
use crate::{Entity, ExitCode, OutputFormat, Setup};

fn encode_args(args: &[&str]) -> Result<crate::EncodeArgs, ExitCode> {
    let matches = basic_app().try_get_matches_from(args)?;
    let (cmd, matches) = matches.subcommand().unwrap();
    assert_eq!(cmd, CMD_ENCODE);
    Setup::from_matches(cmd, matches)?.encode(matches)
}

#[test]
fn subcommand_is_required() {
    let err = basic_app().try_get_matches_from([BIN_NAME]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn encode_defaults() {
    let args = encode_args(&[BIN_NAME, CMD_ENCODE]).unwrap();
    assert_eq!(args.entity, Entity::Transaction);
    assert_eq!(args.output, OutputFormat::Hex);
    assert_eq!(args.input, None);
}

#[test]
fn encode_stdin_dash() {
    let args = encode_args(&[BIN_NAME, CMD_ENCODE, STDIN]).unwrap();
    assert_eq!(args.input, None);

    let args = encode_args(&[BIN_NAME, CMD_ENCODE, "tx.json"]).unwrap();
    assert_eq!(args.input, Some(PathBuf::from("tx.json")));
}

#[test]
fn encode_entities() {
    for name in Entity::NAMES {
        let args = encode_args(&[BIN_NAME, CMD_ENCODE, "--entity", name]).unwrap();
        assert_eq!(args.entity.as_str(), name);
    }

    let err = basic_app()
        .try_get_matches_from([BIN_NAME, CMD_ENCODE, "--entity", "block"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    assert_eq!(
        encode_args(&[BIN_NAME, CMD_ENCODE, "-e", "witness"]),
        Err(ExitCode::Cli)
    );
}

#[test]
fn format_overrides_config() {
    let mut file = tempfile::Builder::new()
        .prefix("cli_test")
        .suffix(".toml")
        .tempfile()
        .unwrap();
    std::io::Write::write_all(&mut file, b"[encoder]\noutput = \"binary\"\nmax_serialized_size = 100\n")
        .unwrap();
    let config = file.path().to_str().unwrap();

    let args = encode_args(&[BIN_NAME, "--config", config, CMD_ENCODE]).unwrap();
    assert_eq!(args.output, OutputFormat::Binary);
    assert_eq!(args.max_serialized_size, 100);

    let args = encode_args(&[BIN_NAME, CMD_ENCODE, "-c", config, "--format", "hex"]).unwrap();
    assert_eq!(args.output, OutputFormat::Hex);
    assert_eq!(args.max_serialized_size, 100);
}

#[test]
fn missing_config_file() {
    assert_eq!(
        encode_args(&[BIN_NAME, "--config", "/nonexistent/ckb-txcodec.toml", CMD_ENCODE]),
        Err(ExitCode::IO)
    );
}
