use crate::{
    header_size, serialize_bytes, serialize_dynvec, serialize_fixvec, serialize_table, serialize_uint32,
    ContainerError,
};
use ckb_txcodec_error::ErrorKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn read_u32(slice: &[u8], at: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&slice[at..at + 4]);
    u32::from_le_bytes(buf)
}

#[test]
fn uint32_is_little_endian() {
    assert_eq!(serialize_uint32(0), [0, 0, 0, 0]);
    assert_eq!(serialize_uint32(0x0102_0304), [4, 3, 2, 1]);
    assert_eq!(serialize_uint32(u32::MAX), [0xff; 4]);
}

#[test]
fn empty_fixvec() {
    let items: Vec<Vec<u8>> = Vec::new();
    assert_eq!(serialize_fixvec(&items).unwrap(), vec![0, 0, 0, 0]);
}

#[test]
fn fixvec_keeps_item_order() {
    let items = vec![vec![1u8, 2], vec![3, 4], vec![5, 6]];
    assert_eq!(
        serialize_fixvec(&items).unwrap(),
        vec![3, 0, 0, 0, 1, 2, 3, 4, 5, 6]
    );
    let reversed: Vec<_> = items.iter().rev().cloned().collect();
    assert_eq!(
        serialize_fixvec(&reversed).unwrap(),
        vec![3, 0, 0, 0, 5, 6, 3, 4, 1, 2]
    );
}

#[test]
fn byte_fixvec() {
    assert_eq!(serialize_bytes(&[]).unwrap(), vec![0, 0, 0, 0]);
    assert_eq!(
        serialize_bytes(&[0xab, 0xcd]).unwrap(),
        vec![2, 0, 0, 0, 0xab, 0xcd]
    );
    let one_byte_items = [[0xabu8], [0xcd]];
    assert_eq!(
        serialize_bytes(&[0xab, 0xcd]).unwrap(),
        serialize_fixvec(&one_byte_items).unwrap()
    );
}

#[test]
fn empty_dynvec() {
    let items: Vec<Vec<u8>> = Vec::new();
    assert_eq!(serialize_dynvec(&items).unwrap(), vec![4, 0, 0, 0]);
}

#[test]
fn dynvec_offsets() {
    let item_a = vec![0xaa; 3];
    let item_b = vec![0xbb; 5];
    let bytes = serialize_dynvec(&[&item_a[..], &item_b[..]]).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&20u32.to_le_bytes());
    expected.extend_from_slice(&12u32.to_le_bytes());
    expected.extend_from_slice(&15u32.to_le_bytes());
    expected.extend_from_slice(&item_a);
    expected.extend_from_slice(&item_b);
    assert_eq!(bytes, expected);
}

#[test]
fn table_with_empty_last_field() {
    let capacity = [1u8; 8];
    let lock = [2u8; 5];
    let absent: &[u8] = &[];
    let without = serialize_table([&capacity[..], &lock[..], absent]).unwrap();
    assert_eq!(without.len(), 16 + 8 + 5);
    assert_eq!(read_u32(&without, 0), 29);
    assert_eq!(read_u32(&without, 4), 16);
    assert_eq!(read_u32(&without, 8), 24);
    // the absent field points at the end of the buffer
    assert_eq!(read_u32(&without, 12), 29);

    let type_ = [3u8; 7];
    let with = serialize_table([&capacity[..], &lock[..], &type_[..]]).unwrap();
    assert_eq!(read_u32(&with, 0), 36);
    assert_eq!(&with[4..12], &without[4..12]);
    assert_eq!(read_u32(&with, 12), 29);
    assert_eq!(&with[16..29], &without[16..29]);
}

#[test]
fn table_and_dynvec_share_layout() {
    let fields = [&b"abc"[..], &b""[..], &b"de"[..]];
    assert_eq!(
        serialize_table(fields).unwrap(),
        serialize_dynvec(&fields).unwrap()
    );
}

#[test]
fn header_size_overflow() {
    assert_eq!(header_size(0), Some(4));
    assert_eq!(header_size(2), Some(12));
    assert_eq!(header_size(usize::MAX), None);
}

#[test]
fn container_error_kind() {
    let error: ckb_txcodec_error::Error = ContainerError::SizeExceedsHeader { size: 1 << 33 }.into();
    assert_eq!(error.kind(), ErrorKind::Composition);
    assert_eq!(
        error.downcast_ref::<ContainerError>(),
        Some(&ContainerError::SizeExceedsHeader { size: 1 << 33 })
    );
}

proptest! {
    #[test]
    fn dynvec_offsets_point_at_items(items in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 0..8)) {
        let bytes = serialize_dynvec(&items).unwrap();
        prop_assert_eq!(read_u32(&bytes, 0) as usize, bytes.len());
        let count = items.len();
        for (index, item) in items.iter().enumerate() {
            let start = read_u32(&bytes, 4 + 4 * index) as usize;
            let end = if index + 1 == count {
                bytes.len()
            } else {
                read_u32(&bytes, 4 + 4 * (index + 1)) as usize
            };
            prop_assert_eq!(&bytes[start..end], &item[..]);
        }
    }
}

// zero-sized items keep these containers free to build
#[cfg(target_pointer_width = "64")]
#[test]
fn fixvec_rejects_count_beyond_u32() {
    const COUNT: usize = u32::MAX as usize + 1;
    let items = [[0u8; 0]; COUNT];
    let error = serialize_fixvec(&items).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Composition);
    assert_eq!(
        error.downcast_ref::<ContainerError>(),
        Some(&ContainerError::ItemCountOverflow { count: COUNT })
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn dynvec_rejects_header_beyond_u32() {
    const COUNT: usize = u32::MAX as usize / 4;
    let items = [[0u8; 0]; COUNT];
    let error = serialize_dynvec(&items).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Composition);
    assert_eq!(
        error.downcast_ref::<ContainerError>(),
        Some(&ContainerError::SizeExceedsHeader {
            size: u32::MAX as usize + 1
        })
    );
}
