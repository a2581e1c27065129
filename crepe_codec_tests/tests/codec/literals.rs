use anyhow::Result;
use crepe_codec::{
    decode_from_slice, decode_from_str, encode_to_vec, to_literal_text, to_plain_text, Byte,
    Variant2, BINARY_BIG, BINARY_LITTLE, TEXT, TEXT_TAGGED,
};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::mem;

fn le_word(n: usize) -> Vec<u8> {
    n.to_le_bytes().to_vec()
}

pub fn test_binary_literals() -> Result<()> {
    assert_eq!(vec![0x01], encode_to_vec(&true, BINARY_LITTLE)?);
    assert_eq!(
        vec![0x78, 0x56, 0x34, 0x12],
        encode_to_vec(&0x1234_5678i32, BINARY_LITTLE)?
    );
    assert_eq!(
        vec![0x00, 0x00, 0x80, 0x3F],
        encode_to_vec(&1.0f32, BINARY_LITTLE)?
    );

    let empty = encode_to_vec(&String::new(), BINARY_LITTLE)?;
    assert_eq!(vec![0x00; mem::size_of::<usize>()], empty);

    let mut exp = le_word(4);
    for word in [
        [0x01, 0x00, 0x00, 0x00],
        [0x0A, 0x00, 0x00, 0x00],
        [0x64, 0x00, 0x00, 0x00],
        [0x63, 0x00, 0x00, 0x00],
    ] {
        exp.extend_from_slice(&word);
    }
    assert_eq!(exp, encode_to_vec(&vec![1u32, 10, 100, 99], BINARY_LITTLE)?);
    assert_eq!(
        vec![1u32, 10, 100, 99],
        decode_from_slice::<Vec<u32>>(&exp, BINARY_LITTLE)?
    );

    /* Big-endian bytes are little-endian bytes reversed, per scalar. */
    let scalars_le = [
        encode_to_vec(&0x0102_0304_0506_0708u64, BINARY_LITTLE)?,
        encode_to_vec(&-2i16, BINARY_LITTLE)?,
        encode_to_vec(&1.5f64, BINARY_LITTLE)?,
    ];
    let scalars_be = [
        encode_to_vec(&0x0102_0304_0506_0708u64, BINARY_BIG)?,
        encode_to_vec(&-2i16, BINARY_BIG)?,
        encode_to_vec(&1.5f64, BINARY_BIG)?,
    ];
    for (le, be) in scalars_le.iter().zip_eq(scalars_be.iter()) {
        assert_eq!(le.iter().rev().copied().collect::<Vec<_>>(), *be);
    }

    /* Single bytes and UTF-8 chars do not depend on byte order. */
    for val in [Byte(0xA7), Byte(0x00)] {
        assert_eq!(
            encode_to_vec(&val, BINARY_LITTLE)?,
            encode_to_vec(&val, BINARY_BIG)?
        );
    }
    assert_eq!(
        encode_to_vec(&'λ', BINARY_LITTLE)?,
        encode_to_vec(&'λ', BINARY_BIG)?
    );

    Ok(())
}

pub fn test_text_literals() -> Result<()> {
    assert_eq!("1.250000000e+00", to_plain_text(&1.25f32)?);
    assert_eq!("byte(0xA7)", to_literal_text(&Byte(0xA7))?);

    let map = BTreeMap::from([('p', false), ('h', false), ('o', true), ('i', true)]);
    assert_eq!(
        "map<char,bool>(('h', false), ('i', true), ('o', true), ('p', false))",
        to_literal_text(&map)?
    );

    assert_eq!("\"a\\\"b\"", to_plain_text("a\"b")?);
    assert_eq!("string(\"\")", to_literal_text("")?);
    assert_eq!("(true, (1, 2))", to_plain_text(&Some((1u8, 2i64)))?);
    assert_eq!(
        "vector<variant<bool,byte>>((0, bool(false)), (1, byte(0x01)))",
        to_literal_text(&vec![
            Variant2::<bool, Byte>::V0(false),
            Variant2::V1(Byte(0x01))
        ])?
    );

    /* Whitespace between tokens is insignificant on decode. */
    assert_eq!(
        map,
        decode_from_str::<BTreeMap<char, bool>>(
            "map<char,bool> ( ( 'h' , false ),('i',true),\n('o', true), ('p',false) )",
            TEXT_TAGGED
        )?
    );
    assert_eq!(
        vec![-1i64, 0, 1],
        decode_from_str::<Vec<i64>>("(-1,0,  1)", TEXT)?
    );

    Ok(())
}
