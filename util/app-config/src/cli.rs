//! Command line interface of ckb-txcodec.
use crate::{Entity, OutputFormat};
use clap::{builder::PossibleValuesParser, Arg, ArgMatches, Command};
use std::path::PathBuf;

/// binary file name
pub const BIN_NAME: &str = "ckb-txcodec";

/// Subcommand `encode`.
pub const CMD_ENCODE: &str = "encode";

/// Global option: path of the config file.
pub const ARG_CONFIG: &str = "config";
/// Which entity the input describes.
pub const ARG_ENTITY: &str = "entity";
/// Output encoding.
pub const ARG_FORMAT: &str = "format";
/// Input file.
pub const ARG_INPUT: &str = "input";

/// The input path which means stdin.
pub const STDIN: &str = "-";

/// Builds the command line parser.
pub fn basic_app() -> Command {
    Command::new(BIN_NAME)
        .author("Nervos Core Dev <dev@nervos.org>")
        .about("Encodes CKB transactions given as 0x-hex JSON into molecule bytes")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .term_width(110)
        .arg(
            Arg::new(ARG_CONFIG)
                .global(true)
                .short('c')
                .long(ARG_CONFIG)
                .value_name("path")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Reads options from the TOML config file <path>"),
        )
        .subcommand(encode())
}

/// Parses the process arguments, exiting on errors.
pub fn get_matches() -> ArgMatches {
    basic_app().get_matches()
}

fn encode() -> Command {
    Command::new(CMD_ENCODE)
        .about(
            "Serializes a JSON entity into molecule bytes\n\
             Example:\n\
             ckb-txcodec encode --entity script script.json",
        )
        .arg(
            Arg::new(ARG_ENTITY)
                .short('e')
                .long(ARG_ENTITY)
                .action(clap::ArgAction::Set)
                .value_parser(PossibleValuesParser::new(Entity::NAMES))
                .help("The kind of entity the input describes [default: transaction]"),
        )
        .arg(
            Arg::new(ARG_FORMAT)
                .short('f')
                .long(ARG_FORMAT)
                .action(clap::ArgAction::Set)
                .value_parser(PossibleValuesParser::new(OutputFormat::NAMES))
                .help("Output encoding, overrides `encoder.output` in the config file"),
        )
        .arg(
            Arg::new(ARG_INPUT)
                .value_name("input")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("The JSON file to read, `-` or omitted reads stdin"),
        )
}
