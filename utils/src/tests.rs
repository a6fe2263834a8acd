// Copyright (c) the Glacier contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{group_vector_elements, ByteReader, ByteWriter, SliceReader};

// VARIABLE-LENGTH INTEGERS
// ================================================================================================

#[test]
fn write_read_usize() {
    let values = [0usize, 1, 42, 127, 128, 255, 256, 16_383, 16_384, 1 << 20, (1 << 32) + 7];

    let mut target: Vec<u8> = Vec::new();
    for &value in values.iter() {
        target.write_usize(value);
    }

    let mut reader = SliceReader::new(&target);
    for &value in values.iter() {
        assert_eq!(value, reader.read_usize().unwrap());
    }
    assert!(!reader.has_more_bytes());
}

#[test]
fn read_usize_eof() {
    // continuation bit set but no next byte
    let mut reader = SliceReader::new(&[0x80]);
    assert!(reader.read_usize().is_err());
}

// PRIMITIVE READS
// ================================================================================================

#[test]
fn write_read_primitives() {
    let mut target: Vec<u8> = Vec::new();
    target.write_u8(0xab);
    target.write_u16(0x1234);
    target.write_u32(0xdeadbeef);
    target.write_u64(0x0123456789abcdef);

    let mut reader = SliceReader::new(&target);
    assert_eq!(0xab, reader.read_u8().unwrap());
    assert_eq!(0x1234, reader.read_u16().unwrap());
    assert_eq!(0xdeadbeef, reader.read_u32().unwrap());
    assert_eq!(0x0123456789abcdef, reader.read_u64().unwrap());
    assert!(reader.read_u8().is_err());
}

// SLICE GROUPING
// ================================================================================================

#[test]
fn group_elements() {
    let n = 16;
    let source = (0..n as u64).collect::<Vec<_>>();

    let grouped = group_vector_elements::<u64, 8>(source);
    assert_eq!(n / 8, grouped.len());
    assert_eq!([0, 1, 2, 3, 4, 5, 6, 7], grouped[0]);
    assert_eq!([8, 9, 10, 11, 12, 13, 14, 15], grouped[1]);
}
