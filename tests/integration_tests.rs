//! Integration tests for the bytewords codec.
//!
//! The pinned strings below come from the published Bytewords definition
//! and must match any conforming implementation byte-for-byte.

use bytewords::{decode, encode, BytewordsError, Style};

const ALL_STYLES: [Style; 3] = [Style::Standard, Style::Uri, Style::Minimal];

#[test]
fn test_reference_vector_single_zero_byte() {
    // 1 payload byte plus 4 checksum bytes renders as exactly 5 tokens.
    assert_eq!(encode(Style::Standard, &[0x00]), "able tied also webs lung");
    assert_eq!(encode(Style::Uri, &[0x00]), "able-tied-also-webs-lung");
    assert_eq!(encode(Style::Minimal, &[0x00]), "aetdaowslg");

    assert_eq!(
        decode(Style::Standard, "able tied also webs lung").unwrap(),
        vec![0x00]
    );
}

#[test]
fn test_reference_vector_five_bytes() {
    let payload = [0x00, 0x01, 0x02, 0x80, 0xff];

    assert_eq!(
        encode(Style::Standard, &payload),
        "able acid also lava zero jade need echo taxi"
    );
    assert_eq!(
        encode(Style::Uri, &payload),
        "able-acid-also-lava-zero-jade-need-echo-taxi"
    );
    assert_eq!(encode(Style::Minimal, &payload), "aeadaolazojendeoti");
}

#[test]
fn test_reference_vector_seed() {
    // 28-byte seed from the Bytewords reference vectors.
    let seed = hex::decode("d9012ca20150c7098580125e2ab0981253468b2dbc5202d8641947da").unwrap();

    assert_eq!(
        encode(Style::Standard, &seed),
        "tuna acid draw oboe acid good slot axis list lava brag holy door puff \
         monk brag guru frog luau drop roof grim also trip idle chef fuel twin \
         tied draw grim ramp"
    );
    assert_eq!(
        encode(Style::Minimal, &seed),
        "taaddwoeadgdstasltlabghydrpfmkbggufgludprfgmaotpiecffltntddwgmrp"
    );

    assert_eq!(decode(Style::Standard, &encode(Style::Standard, &seed)).unwrap(), seed);
}

#[test]
fn test_empty_payload_boundary() {
    // Zero payload bytes still carry the four checksum words.
    let encoded = encode(Style::Standard, &[]);
    assert_eq!(encoded, "able able able able");
    assert_eq!(encoded.split(' ').count(), 4);
    assert_eq!(decode(Style::Standard, &encoded).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_too_short_boundary() {
    // Fewer resolved bytes than a checksum can never validate.
    assert_eq!(decode(Style::Standard, "able"), Err(BytewordsError::TooShort));
    assert_eq!(
        decode(Style::Standard, "able able able"),
        Err(BytewordsError::TooShort)
    );
    assert_eq!(decode(Style::Minimal, "aeaeae"), Err(BytewordsError::TooShort));
}

#[test]
fn test_round_trip_all_styles() {
    let payloads: Vec<Vec<u8>> = vec![
        vec![],
        vec![0x00],
        vec![0xff],
        b"Wolf".to_vec(),
        (0..=255).collect(),
        vec![0xde, 0xad, 0xbe, 0xef].repeat(50),
    ];

    for payload in &payloads {
        for style in ALL_STYLES {
            let encoded = encode(style, payload);
            assert_eq!(
                decode(style, &encoded).unwrap(),
                *payload,
                "round trip failed for style {} and {} payload bytes",
                style,
                payload.len()
            );
        }
    }
}

#[test]
fn test_cross_style_equivalence() {
    let payload = hex::decode("c7098580125e2ab0").unwrap();

    let via_standard = decode(Style::Standard, &encode(Style::Standard, &payload)).unwrap();
    let via_uri = decode(Style::Uri, &encode(Style::Uri, &payload)).unwrap();
    let via_minimal = decode(Style::Minimal, &encode(Style::Minimal, &payload)).unwrap();

    assert_eq!(via_standard, payload);
    assert_eq!(via_uri, payload);
    assert_eq!(via_minimal, payload);
}

#[test]
fn test_case_insensitive_decoding() {
    let payload = b"case test".to_vec();
    for style in ALL_STYLES {
        let upper = encode(style, &payload).to_uppercase();
        assert_eq!(decode(style, &upper).unwrap(), payload);
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let payload: Vec<u8> = (0..64).map(|i| i * 3).collect();
    for style in ALL_STYLES {
        let first = encode(style, &payload);
        for _ in 0..10 {
            assert_eq!(encode(style, &payload), first);
        }
    }
}

#[test]
fn test_output_length_formula() {
    for len in [0usize, 1, 4, 16, 100] {
        let payload = vec![0x42u8; len];
        let n = len + 4;
        assert_eq!(encode(Style::Standard, &payload).len(), 5 * n - 1);
        assert_eq!(encode(Style::Uri, &payload).len(), 5 * n - 1);
        assert_eq!(encode(Style::Minimal, &payload).len(), 2 * n);
    }
}
