use crate::OutputFormat;
use std::{fmt, path::PathBuf, str::FromStr};

/// Parsed command line arguments for `ckb-txcodec encode`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeArgs {
    /// The kind of entity the input document describes.
    pub entity: Entity,
    /// How to write the serialized bytes.
    pub output: OutputFormat,
    /// The input file, `None` reads stdin.
    pub input: Option<PathBuf>,
    /// Serialized entities larger than this are rejected.
    pub max_serialized_size: usize,
}

/// The entities `encode` knows how to serialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entity {
    /// A raw transaction.
    #[default]
    Transaction,
    /// A lock or type script.
    Script,
    /// A reference to a cell.
    OutPoint,
    /// A transaction input.
    CellInput,
    /// A transaction output without its data.
    CellOutput,
    /// A cell dependency.
    CellDep,
}

impl Entity {
    /// The names accepted by `--entity`.
    pub const NAMES: [&'static str; 6] = [
        "transaction",
        "script",
        "out-point",
        "cell-input",
        "cell-output",
        "cell-dep",
    ];

    /// The name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Transaction => "transaction",
            Entity::Script => "script",
            Entity::OutPoint => "out-point",
            Entity::CellInput => "cell-input",
            Entity::CellOutput => "cell-output",
            Entity::CellDep => "cell-dep",
        }
    }
}

impl FromStr for Entity {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "transaction" => Ok(Entity::Transaction),
            "script" => Ok(Entity::Script),
            "out-point" => Ok(Entity::OutPoint),
            "cell-input" => Ok(Entity::CellInput),
            "cell-output" => Ok(Entity::CellOutput),
            "cell-dep" => Ok(Entity::CellDep),
            _ => Err(format!(
                "Invalid entity {:?}, expected one of {}",
                name,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
