use anyhow::Result;
use crepe_codec::codec::union::encode_alternative;
use crepe_codec::{
    decode_from_slice, encode_to_vec, type_name_of, CodecError, EncodingMode, Variant2,
    WireFamily, Writer, BINARY_BIG_TAGGED, BINARY_LITTLE_TAGGED, BINARY_NATIVE_TAGGED,
    TEXT_TAGGED,
};

type Pair = Variant2<u8, u8>;

/// A `Pair` whose index is one past its last alternative.
fn encode_out_of_range(mode: EncodingMode) -> Result<Vec<u8>> {
    let mut w = Writer::from(vec![]);
    let mut inner_mode = mode;
    if mode.includes_type_tag() {
        match mode.wire_family() {
            WireFamily::Binary => {
                w.write(type_name_of::<Pair>().as_str(), mode.demoted())?;
            }
            WireFamily::Text => w.write_token(&type_name_of::<Pair>())?,
        }
        inner_mode = mode.demoted();
    }
    encode_alternative(&mut w, 2, &7u8, inner_mode)?;
    Ok(w.into_inner())
}

pub fn test_union_index_bounds(mode: EncodingMode) -> Result<()> {
    let buf = encode_out_of_range(mode)?;
    let err = decode_from_slice::<Pair>(&buf, mode).unwrap_err();
    assert_eq!(
        Some(&CodecError::InvalidUnionIndex { index: 2, arity: 2 }),
        err.downcast_ref::<CodecError>(),
        "{mode}"
    );

    for val in [Pair::V0(0), Pair::V1(u8::MAX)] {
        let buf = encode_to_vec(&val, mode)?;
        assert_eq!(val, decode_from_slice::<Pair>(&buf, mode)?, "{mode}");
    }

    Ok(())
}

fn assert_mismatch(err: anyhow::Error, expected: &str, found: &str) {
    assert_eq!(
        Some(&CodecError::TypeMismatch {
            expected: String::from(expected),
            found: String::from(found),
        }),
        err.downcast_ref::<CodecError>(),
        "{err}"
    );
}

pub fn test_type_tag_mismatch() -> Result<()> {
    for mode in [
        BINARY_BIG_TAGGED,
        BINARY_LITTLE_TAGGED,
        BINARY_NATIVE_TAGGED,
        TEXT_TAGGED,
    ] {
        let buf = encode_to_vec(&7u32, mode)?;
        assert_mismatch(
            decode_from_slice::<i32>(&buf, mode).unwrap_err(),
            "int32",
            "uint32",
        );

        let buf = encode_to_vec(&vec![Some(1i8)], mode)?;
        assert_mismatch(
            decode_from_slice::<Vec<Option<u8>>>(&buf, mode).unwrap_err(),
            "vector<optional<uint8>>",
            "vector<optional<int8>>",
        );

        let buf = encode_to_vec(&Variant2::<u8, String>::V1(String::from("x")), mode)?;
        assert_mismatch(
            decode_from_slice::<Variant2<String, u8>>(&buf, mode).unwrap_err(),
            "variant<string,uint8>",
            "variant<uint8,string>",
        );
    }

    /* Only the tagged value is checked; its members are not tagged. */
    let buf = encode_to_vec(&(1u8, 2u8), BINARY_LITTLE_TAGGED)?;
    assert_eq!((1u8, 2u8), decode_from_slice::<(u8, u8)>(&buf, BINARY_LITTLE_TAGGED)?);

    Ok(())
}
