//! Tests for font table decoding

use super::*;
use crate::{FILE_SIGNATURE, Glyph, HEADER_SIZE, RECORD_SIZE, encode};

/// Valid 12-byte header
fn header() -> Vec<u8> {
    let mut data = FILE_SIGNATURE.to_vec();
    data.extend_from_slice(&[0; 7]);
    data
}

/// Raw record in the layout found in shipped assets
fn record(code: u16, width: u8, height: u8, frame: u16) -> [u8; RECORD_SIZE] {
    let [c0, c1] = code.to_le_bytes();
    let [f0, f1] = frame.to_le_bytes();
    [c0, c1, 0, width, height, 1, 0, 0, f0, f1, 1, 0, 0, c0]
}

fn table_with(records: &[[u8; RECORD_SIZE]]) -> Vec<u8> {
    let mut data = header();
    for r in records {
        data.extend_from_slice(r);
    }
    data
}

#[test]
fn test_decode_single_glyph() {
    let mut data = b"Woo!\x01".to_vec();
    data.extend_from_slice(&[0; 7]);
    data.extend_from_slice(&[
        0x41, 0x00, 0x00, 0x0A, 0x14, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x00, 0x00, 0x41,
    ]);

    let table = decode(&data).unwrap();
    assert_eq!(table.len(), 1);

    let glyph = table.get_char('A').unwrap();
    assert_eq!(glyph.width(), 10);
    assert_eq!(glyph.height(), 20);
    assert_eq!(glyph.frame_index(), 5);
}

#[test]
fn test_decode_header_only() {
    let table = decode(&header()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_empty_buffer_is_invalid() {
    assert_eq!(decode(&[]), Err(FontTableError::InvalidFormat));
}

#[test]
fn test_bad_signature() {
    let mut data = table_with(&[record(0x41, 1, 1, 1)]);
    data[3] = b'?';
    assert_eq!(decode(&data), Err(FontTableError::InvalidFormat));

    let mut data = header();
    data[4] = 0x02;
    assert_eq!(decode(&data), Err(FontTableError::InvalidFormat));
}

#[test]
fn test_short_signature() {
    for len in 1..FILE_SIGNATURE.len() {
        assert_eq!(
            decode(&FILE_SIGNATURE[..len]),
            Err(FontTableError::InvalidFormat),
            "len {len}"
        );
    }
}

#[test]
fn test_truncated_header() {
    let data = header();
    for len in 5..HEADER_SIZE {
        assert_eq!(
            decode(&data[..len]),
            Err(FontTableError::TruncatedHeader { len }),
            "len {len}"
        );
    }
}

#[test]
fn test_reserved_header_bytes_ignored() {
    let mut data = table_with(&[record(0x30, 4, 4, 0)]);
    data[5..HEADER_SIZE].copy_from_slice(&[0xFF; 7]);
    assert_eq!(decode(&data).unwrap().len(), 1);
}

#[test]
fn test_clean_termination() {
    for k in 0..5u16 {
        let records: Vec<_> = (0..k).map(|i| record(0x41 + i, 8, 12, i)).collect();
        let data = table_with(&records);
        assert_eq!(data.len(), HEADER_SIZE + RECORD_SIZE * k as usize);

        let table = decode(&data).unwrap();
        assert_eq!(table.len(), k as usize);
    }
}

#[test]
fn test_partial_record() {
    let full = table_with(&[record(0x41, 8, 12, 0), record(0x42, 8, 12, 1), record(0x43, 8, 12, 2)]);
    let two_records = HEADER_SIZE + 2 * RECORD_SIZE;

    for m in 1..RECORD_SIZE {
        let err = decode(&full[..two_records + m]).unwrap_err();
        assert_eq!(
            err,
            FontTableError::TruncatedRecord {
                offset: two_records,
                remaining: m,
                records_read: 2,
            },
            "m {m}"
        );
    }
}

#[test]
fn test_duplicate_code_last_wins() {
    let data = table_with(&[
        record(0x41, 8, 12, 1),
        record(0x42, 9, 12, 2),
        record(0x41, 10, 14, 3),
    ]);

    let table = decode(&data).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0x41), Some(&Glyph::new(3, 10, 14)));
}

#[test]
fn test_unsorted_codes() {
    let data = table_with(&[record(0x7A, 1, 1, 0), record(0x20, 2, 2, 1), record(0x4E2D, 3, 3, 2)]);
    let table = decode(&data).unwrap();
    let codes: Vec<u32> = table.codes().collect();
    assert_eq!(codes, vec![0x20, 0x7A, 0x4E2D]);
    assert_eq!(table.get_char('中').map(Glyph::frame_index), Some(2));
}

#[test]
fn test_max_field_values() {
    let data = table_with(&[record(0xFFFF, 255, 255, 0xFFFF)]);
    let table = decode(&data).unwrap();
    assert_eq!(table.get(0xFFFF), Some(&Glyph::new(65535, 255, 255)));
}

#[test]
fn test_roundtrip() {
    let table: crate::GlyphTable = [
        (0x20, Glyph::new(0, 4, 16)),
        (0x41, Glyph::new(33, 10, 16)),
        (0x61, Glyph::new(65, 8, 16)),
        (0xFFFF, Glyph::new(65535, 255, 0)),
    ]
    .into_iter()
    .collect();

    let data = encode(&table).unwrap();
    assert_eq!(data.len(), HEADER_SIZE + 4 * RECORD_SIZE);
    assert_eq!(decode(&data).unwrap(), table);
}

#[test]
fn test_reencode_drops_legacy_reserved_bytes() {
    let data = table_with(&[record(0x41, 10, 20, 5)]);
    let reencoded = encode(&decode(&data).unwrap()).unwrap();

    assert_eq!(reencoded.len(), data.len());
    assert_ne!(reencoded, data);
    assert_eq!(decode(&reencoded).unwrap(), decode(&data).unwrap());
}
