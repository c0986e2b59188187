use bytewords::{decode, encode, BytewordsError, Style};

fn main() {
    println!("Bytewords Codec Demo");
    println!("====================");

    let seed: Vec<u8> = vec![0x00, 0x01, 0x02, 0x80, 0xff];
    println!("\n1. Encoding {:02x?} in all styles:", seed);

    for style in [Style::Standard, Style::Uri, Style::Minimal] {
        let encoded = encode(style, &seed);
        println!("  {:<8} → {}", style.to_string(), encoded);

        match decode(style, &encoded) {
            Ok(decoded) if decoded == seed => println!("  {:<8}   round-trip ✓", ""),
            Ok(decoded) => println!("  {:<8}   round-trip MISMATCH: {:02x?}", "", decoded),
            Err(e) => println!("  {:<8}   round-trip failed: {}", "", e),
        }
    }

    println!("\n2. Empty payload carries only its checksum:");
    let empty = encode(Style::Standard, &[]);
    println!("  encode(standard, []) → {:?}", empty);
    match decode(Style::Standard, &empty) {
        Ok(payload) => println!("  decodes to {} bytes ✓", payload.len()),
        Err(e) => println!("  ✗ Error: {}", e),
    }

    println!("\n3. Corruption is detected, never silently decoded:");
    let tampered_word = "able zzzz also webs lung";
    let tampered_crc = "acid tied also webs lung";
    let truncated = "able tied";

    for input in [tampered_word, tampered_crc, truncated] {
        match decode(Style::Standard, input) {
            Ok(_) => println!("  {:?} ✗ unexpectedly decoded", input),
            Err(BytewordsError::InvalidWord(w)) => {
                println!("  {:?} ✓ rejected (invalid word {:?})", input, w)
            }
            Err(e) => println!("  {:?} ✓ rejected ({})", input, e),
        }
    }

    println!("\n4. Transcription is case-insensitive:");
    let shouted = encode(Style::Standard, &seed).to_uppercase();
    match decode(Style::Standard, &shouted) {
        Ok(decoded) => println!("  {:?} decodes: {} ✓", shouted, decoded == seed),
        Err(e) => println!("  ✗ Error: {}", e),
    }
}
