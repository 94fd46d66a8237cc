use crate::bytes::JsonBytes;
use crate::{prelude::Serialize, Byte32, Capacity, ScalarError, Since, Uint32, Version};
use ckb_logger::trace;
use ckb_txcodec_error::Error;
use ckb_txcodec_molecule::{serialize_dynvec, serialize_fixvec, serialize_table};
use serde::{Deserialize, Deserializer};
use std::{fmt, str::FromStr};

/// Serializes a child field, tagging a failure with the field name.
fn field<T: Serialize>(name: &'static str, value: &T) -> Result<Vec<u8>, Error> {
    value.serialize().map_err(|err| err.at(name))
}

/// Serializes every item of a vector field, tagging a failure with `name[index]`.
fn items<T, F>(name: &'static str, values: &[T], serialize: F) -> Result<Vec<Vec<u8>>, Error>
where
    F: Fn(&T) -> Result<Vec<u8>, Error>,
{
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            serialize(value).map_err(|err| err.at(format!("[{}]", index)).at(name))
        })
        .collect()
}

macro_rules! impl_closed_enum {
    ($name:ident, $display:expr, { $($variant:ident => ($text:literal, $code:literal)),+ $(,)? }) => {
        impl $name {
            const EXPECTED: &'static str = $display;

            /// The one-byte molecule code.
            pub fn code(&self) -> u8 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// The textual form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Serialize for $name {
            fn serialize(&self) -> Result<Vec<u8>, Error> {
                Ok(vec![self.code()])
            }
        }

        impl FromStr for $name {
            type Err = ScalarError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                match text {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ScalarError::UnknownVariant {
                        name: stringify!($name),
                        value: text.to_owned(),
                        expected: Self::EXPECTED,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Specifies how the script `code_hash` is used to match the script code.
///
/// Allowed kinds: "data" and "type".
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub enum ScriptHashType {
    /// Type "data" matches script code via cell data hash.
    #[default]
    Data,
    /// Type "type" matches script code via cell type script hash.
    Type,
}

impl_closed_enum!(ScriptHashType, "\"data\", \"type\"", {
    Data => ("data", 0),
    Type => ("type", 1),
});

/// The dep cell type. Allowed values: "code" and "dep_group".
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub enum DepType {
    /// Type "code".
    ///
    /// Use the cell itself as the dep cell.
    #[default]
    Code,
    /// Type "dep_group".
    ///
    /// The cell is a dep group which members are cells. These members are used as dep cells
    /// instead of the group itself.
    DepGroup,
}

impl_closed_enum!(DepType, "\"code\", \"dep_group\"", {
    Code => ("code", 0),
    DepGroup => ("dep_group", 1),
});

/// Describes the lock script and type script for a cell.
///
/// Serialized as a molecule table of `code_hash`, `hash_type` and `args`, where `args` is a
/// `fixvec<byte>`.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_txcodec_types::Script>(r#"
/// {
///   "code_hash": "0x28e83a1277d48add8e72fadaa9248559e1b632bab2bd60b27955ebc4c03800a5",
///   "hash_type": "data",
///   "args": "0x"
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// The hash used to match the script code.
    pub code_hash: Byte32,
    /// Specifies how to use the `code_hash` to match the script code.
    pub hash_type: ScriptHashType,
    /// Arguments for script.
    pub args: JsonBytes,
}

impl Serialize for Script {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let code_hash = field("code_hash", &self.code_hash)?;
        let hash_type = field("hash_type", &self.hash_type)?;
        let args = self.args.serialize_fixvec().map_err(|err| err.at("args"))?;
        serialize_table([&code_hash[..], &hash_type[..], &args[..]])
    }
}

/// The fields of an output cell except the cell data.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_txcodec_types::CellOutput>(r#"
/// {
///   "capacity": "0x2540be400",
///   "lock": {
///     "code_hash": "0x28e83a1277d48add8e72fadaa9248559e1b632bab2bd60b27955ebc4c03800a5",
///     "hash_type": "data",
///     "args": "0x"
///   },
///   "type": null
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellOutput {
    /// The cell capacity in Shannons.
    pub capacity: Capacity,
    /// The lock script.
    pub lock: Script,
    /// The optional type script.
    ///
    /// The JSON field name is "type". An absent type script takes no bytes in the table.
    #[serde(rename = "type", default)]
    pub type_: Option<Script>,
}

impl Serialize for CellOutput {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let capacity = field("capacity", &self.capacity)?;
        let lock = field("lock", &self.lock)?;
        let type_ = match &self.type_ {
            Some(script) => field("type", script)?,
            None => Vec::new(),
        };
        serialize_table([&capacity[..], &lock[..], &type_[..]])
    }
}

/// Reference to a cell via transaction hash and output index.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_txcodec_types::OutPoint>(r#"
/// {
///   "index": "0x0",
///   "tx_hash": "0x365698b50ca0da75dca2c87f9e7b563811d3b5813736b8cc62cc3b106faceb17"
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct OutPoint {
    /// Transaction hash in which the cell is an output.
    pub tx_hash: Byte32,
    /// The output index of the cell in the transaction specified by `tx_hash`.
    pub index: Uint32,
}

impl OutPoint {
    /// Serialized size: a hash and an `u32`.
    pub const SERIALIZED_SIZE: usize = 32 + 4;
}

impl Serialize for OutPoint {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = field("tx_hash", &self.tx_hash)?;
        bytes.extend(field("index", &self.index)?);
        Ok(bytes)
    }
}

/// The input cell of a transaction.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_txcodec_types::CellInput>(r#"
/// {
///   "previous_output": {
///     "index": "0x0",
///     "tx_hash": "0x365698b50ca0da75dca2c87f9e7b563811d3b5813736b8cc62cc3b106faceb17"
///   },
///   "since": "0x0"
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellInput {
    /// Restrict when the transaction can be committed into the chain.
    pub since: Since,
    /// Reference to the input cell.
    pub previous_output: OutPoint,
}

impl CellInput {
    /// Serialized size: an `u64` and an out point.
    pub const SERIALIZED_SIZE: usize = 8 + OutPoint::SERIALIZED_SIZE;
}

impl Serialize for CellInput {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = field("since", &self.since)?;
        bytes.extend(field("previous_output", &self.previous_output)?);
        Ok(bytes)
    }
}

/// The cell dependency of a transaction.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_txcodec_types::CellDep>(r#"
/// {
///   "dep_type": "code",
///   "out_point": {
///     "index": "0x0",
///     "tx_hash": "0xa4037a893eb48e18ed4ef61034ce26eba9c585f15c9cee102ae58505565eccc3"
///   }
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellDep {
    /// Reference to the cell.
    pub out_point: OutPoint,
    /// Dependency type.
    pub dep_type: DepType,
}

impl CellDep {
    /// Serialized size: an out point and one byte.
    pub const SERIALIZED_SIZE: usize = OutPoint::SERIALIZED_SIZE + 1;
}

impl Serialize for CellDep {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = field("out_point", &self.out_point)?;
        bytes.extend(field("dep_type", &self.dep_type)?);
        Ok(bytes)
    }
}

/// The raw transaction: every part of a transaction which is covered by its hash.
///
/// The serialized field order is `version`, `cell_deps`, `header_deps`, `inputs`, `outputs`,
/// `outputs_data`. It defines the canonical bytes, and therefore the transaction hash.
///
/// Fields of the full JSON-RPC transaction which are not part of the raw transaction, such as
/// `witnesses` and `hash`, are accepted and ignored.
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct Transaction {
    /// Reserved for future usage. It must equal 0 in current version.
    pub version: Version,
    /// An array of cell deps.
    pub cell_deps: Vec<CellDep>,
    /// An array of header deps.
    pub header_deps: Vec<Byte32>,
    /// An array of input cells.
    pub inputs: Vec<CellInput>,
    /// An array of output cells.
    pub outputs: Vec<CellOutput>,
    /// Output cells data.
    ///
    /// This is a parallel array of outputs. The data of the output i is `outputs_data[i]`.
    pub outputs_data: Vec<JsonBytes>,
}

impl Serialize for Transaction {
    fn serialize(&self) -> Result<Vec<u8>, Error> {
        let result = self.serialize_fields();
        match &result {
            Ok(bytes) => trace!(
                "serialized transaction: {} cell deps, {} header deps, {} inputs, {} outputs, {} bytes",
                self.cell_deps.len(),
                self.header_deps.len(),
                self.inputs.len(),
                self.outputs.len(),
                bytes.len()
            ),
            Err(err) => trace!("failed to serialize transaction: {}", err),
        }
        result
    }
}

impl Transaction {
    fn serialize_fields(&self) -> Result<Vec<u8>, Error> {
        let version = field("version", &self.version)?;
        let cell_deps = serialize_fixvec(&items("cell_deps", &self.cell_deps, CellDep::serialize)?)
            .map_err(|err| err.at("cell_deps"))?;
        let header_deps =
            serialize_fixvec(&items("header_deps", &self.header_deps, Byte32::serialize)?)
                .map_err(|err| err.at("header_deps"))?;
        let inputs = serialize_fixvec(&items("inputs", &self.inputs, CellInput::serialize)?)
            .map_err(|err| err.at("inputs"))?;
        let outputs = serialize_dynvec(&items("outputs", &self.outputs, CellOutput::serialize)?)
            .map_err(|err| err.at("outputs"))?;
        let outputs_data = serialize_dynvec(&items(
            "outputs_data",
            &self.outputs_data,
            JsonBytes::serialize_fixvec,
        )?)
        .map_err(|err| err.at("outputs_data"))?;

        serialize_table([
            &version[..],
            &cell_deps[..],
            &header_deps[..],
            &inputs[..],
            &outputs[..],
            &outputs_data[..],
        ])
    }
}
