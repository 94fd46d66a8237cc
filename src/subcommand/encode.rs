use ckb_logger::{debug, info};
use ckb_txcodec_config::{EncodeArgs, Entity, ExitCode, OutputFormat};
use ckb_txcodec_error::ErrorKind;
use ckb_txcodec_types::{
    prelude::*, CellDep, CellInput, CellOutput, OutPoint, Script, Transaction,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read, Write};

pub fn encode(args: EncodeArgs) -> Result<(), ExitCode> {
    let json = match &args.input {
        Some(path) => {
            debug!("reading {} from {}", args.entity, path.display());
            fs::read_to_string(path)?
        }
        None => {
            debug!("reading {} from stdin", args.entity);
            let mut json = String::new();
            io::stdin().lock().read_to_string(&mut json)?;
            json
        }
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    encode_to(&args, &json, &mut stdout)
}

/// Serializes the JSON document and writes the bytes in the requested format.
fn encode_to<W: Write>(args: &EncodeArgs, json: &str, writer: &mut W) -> Result<(), ExitCode> {
    let bytes = serialize_entity(args.entity, json)?;
    if bytes.len() > args.max_serialized_size {
        return Err(ErrorKind::Composition
            .other(format!(
                "serialized {} is {} bytes, exceeding the limit of {} bytes",
                args.entity,
                bytes.len(),
                args.max_serialized_size
            ))
            .into());
    }
    info!("serialized {} into {} bytes", args.entity, bytes.len());

    match args.output {
        OutputFormat::Hex => writeln!(writer, "0x{}", faster_hex::hex_string(&bytes))?,
        OutputFormat::Binary => writer.write_all(&bytes)?,
    }
    writer.flush()?;
    Ok(())
}

fn serialize_entity(entity: Entity, json: &str) -> Result<Vec<u8>, ExitCode> {
    match entity {
        Entity::Transaction => serialize_json::<Transaction>(json),
        Entity::Script => serialize_json::<Script>(json),
        Entity::OutPoint => serialize_json::<OutPoint>(json),
        Entity::CellInput => serialize_json::<CellInput>(json),
        Entity::CellOutput => serialize_json::<CellOutput>(json),
        Entity::CellDep => serialize_json::<CellDep>(json),
    }
}

fn serialize_json<T: DeserializeOwned + Serialize>(json: &str) -> Result<Vec<u8>, ExitCode> {
    let entity: T = serde_json::from_str(json)?;
    Ok(entity.serialize()?)
}
