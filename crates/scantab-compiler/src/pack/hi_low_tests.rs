use proptest::prelude::*;

use crate::pack::{Codec, HiLowCodec, PackConfig, PackedArray};
use crate::syntax::{Java, Scala};

#[test]
fn value_splits_into_high_and_low() {
    let mut array = PackedArray::new("RowMap", HiLowCodec, &Java, PackConfig::default());
    array.push(0x1020_3040).unwrap();
    let packed = array.finish();

    assert_eq!(packed.chunks, vec![vec![0x1020, 0x3040]]);
    assert!(packed.text.contains("\"\\u1020\\u3040\";"));
    assert_eq!(packed.unpack(&HiLowCodec), vec![0x1020_3040]);
}

#[test]
fn extremes_fit() {
    let mut records = Vec::new();
    HiLowCodec.encode(u32::MAX, &mut records).unwrap();
    HiLowCodec.encode(0, &mut records).unwrap();

    assert_eq!(records, vec![[0xFFFF, 0xFFFF], [0, 0]]);
}

#[test]
fn one_entry_per_value() {
    let mut array = PackedArray::new("RowMap", HiLowCodec, &Java, PackConfig::default());
    for row in 0..4 {
        array.push(row * 3).unwrap();
    }

    assert_eq!(array.num_entries(), 4);
    assert_eq!(array.finish().unpack(&HiLowCodec), vec![0, 3, 6, 9]);
}

#[test]
fn unpack_loop_per_syntax() {
    assert_eq!(
        HiLowCodec.unpack_loop(&Java),
        vec![
            "final int high = packed.charAt(i) << 16;",
            "i += 1;",
            "result[j] = high | packed.charAt(i);",
            "i += 1;",
            "j += 1;",
        ]
    );
    assert_eq!(
        HiLowCodec.unpack_loop(&Scala)[2],
        "result(j) = high | packed.charAt(i)"
    );
}

proptest! {
    #[test]
    fn round_trip(values in prop::collection::vec(any::<u32>(), 0..200), max_chunk in 8usize..100) {
        let mut array = PackedArray::new("RowMap", HiLowCodec, &Java, PackConfig::new().max_chunk_size(max_chunk));
        for &value in &values {
            array.push(value).unwrap();
        }
        let packed = array.finish();

        prop_assert!(packed.chunks.iter().all(|c| c.len() % 2 == 0));
        prop_assert_eq!(packed.unpack(&HiLowCodec), values);
    }
}
