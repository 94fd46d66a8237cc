
pub(crate) const TX_HASH: &str =
    "0x365698b50ca0da75dca2c87f9e7b563811d3b5813736b8cc62cc3b106faceb17";
pub(crate) const CODE_HASH: &str =
    "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8";

/// A transaction which the reference encoder accepts too: canonical numbers, lowercase digits.
pub(crate) const TRANSACTION_JSON: &str = r#"{
  "version": "0x0",
  "cell_deps": [
    {
      "out_point": {
        "tx_hash": "0xa4037a893eb48e18ed4ef61034ce26eba9c585f15c9cee102ae58505565eccc3",
        "index": "0x0"
      },
      "dep_type": "dep_group"
    },
    {
      "out_point": {
        "tx_hash": "0xc7813f6a415144643970c2e88e0bb6ca6a8edc5dd7c1022746f628284a9936d5",
        "index": "0x2"
      },
      "dep_type": "code"
    }
  ],
  "header_deps": [
    "0x7978ec7ce5b507cfb52e149e36b1a23f6062ed150503c85bbf825da3599095ed"
  ],
  "inputs": [
    {
      "since": "0x0",
      "previous_output": {
        "tx_hash": "0x365698b50ca0da75dca2c87f9e7b563811d3b5813736b8cc62cc3b106faceb17",
        "index": "0x1"
      }
    },
    {
      "since": "0x2000000000000064",
      "previous_output": {
        "tx_hash": "0x0ad9d7e5c2aa2d7b0a4a1c8c7e9e6b4b3d6c0b0f0e1f2a3b4c5d6e7f8091a2b3",
        "index": "0xffffffff"
      }
    }
  ],
  "outputs": [
    {
      "capacity": "0x2540be400",
      "lock": {
        "code_hash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
        "hash_type": "type",
        "args": "0x36c329ed630d6ce750712a477543672adab57f4c"
      },
      "type": null
    },
    {
      "capacity": "0x34e62ce00",
      "lock": {
        "code_hash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
        "hash_type": "type",
        "args": "0x"
      },
      "type": {
        "code_hash": "0x82d76d1b75fe2fd9a27dfbaa65a039221a380d76c926f378d3f81cf3e7e13f2e",
        "hash_type": "data",
        "args": "0x00"
      }
    }
  ],
  "outputs_data": [
    "0x",
    "0x0102030405060708"
  ],
  "witnesses": [
    "0x"
  ]
}"#;

pub(crate) fn read_u32(slice: &[u8], at: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&slice[at..at + 4]);
    u32::from_le_bytes(buf)
}

/// Reads the offsets of a table or dynvec, with the total size appended as the final bound.
pub(crate) fn offsets(slice: &[u8]) -> Vec<usize> {
    let total_size = read_u32(slice, 0) as usize;
    let first = read_u32(slice, 4) as usize;
    let count = first / 4 - 1;
    let mut offsets: Vec<usize> = (0..count)
        .map(|index| read_u32(slice, 4 + 4 * index) as usize)
        .collect();
    offsets.push(total_size);
    offsets
}
