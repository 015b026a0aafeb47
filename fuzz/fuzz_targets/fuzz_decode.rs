#![no_main]

use libfuzzer_sys::fuzz_target;
use vbe_decoder::{decode_bytes, envelope, escape, ErrorKind};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic
    match decode_bytes(data) {
        Ok(decoded) => {
            // Substitution never changes the character count
            let text = vbe_decoder::source::to_text(data);
            let tokens = envelope::unwrap(&text).expect("decoded input has an envelope");
            assert_eq!(decoded.chars().count(), escape::expand(tokens).len());
        }
        Err(e) => {
            assert!(matches!(
                e.kind(),
                ErrorKind::InvalidArgument | ErrorKind::MissingSignature
            ));
        }
    }
});
