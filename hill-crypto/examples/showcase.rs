//! Walks a handful of key/message pairs through encryption and decryption,
//! printing the outcome of each. Run with `cargo run --example showcase`.

use hill_crypto::cipher::Cipher;
use hill_crypto::preset::SPANISH_UPPERCASE;

fn main() {
    let samples: &[(&str, &str)] = &[
        ("FORTALEZA", "CONSUL"),
        ("FORTALEZA", "UUNAMFCIENCIASS"),
        ("IKEY", "CRIPTOGRAFIA"),
        ("IAMAVERYLOONGKEY", "CRIPTOGRAFIA"),
        ("IAMAVERYLOONGKEYINFACTLONGERTHANPAST", "CRIPTOGRAFIA"),
    ];

    println!("Spanish alphabet (uppercase) without diacritics");
    println!("Alphabet: {}", *SPANISH_UPPERCASE);

    let cipher = match Cipher::try_with(SPANISH_UPPERCASE.clone()) {
        Ok(cipher) => cipher,
        Err(e) => {
            println!("An error occurred creating the cipher instance: {}", e);
            return;
        }
    };

    for (i, (key, message)) in samples.iter().enumerate() {
        if i != 0 {
            println!();
        }

        let cipher_text = match cipher.encrypt(message, key) {
            Ok(cipher_text) => cipher_text,
            Err(e) => {
                println!("\t{}) Failed to encrypt {:?} using {:?}: {}", i + 1, message, key, e);
                continue;
            }
        };

        let plain_text = match cipher.decrypt(&cipher_text, key) {
            Ok(plain_text) => plain_text,
            Err(e) => {
                println!(
                    "\t{}) Failed to decrypt {:?} using {:?}: {}",
                    i + 1,
                    cipher_text,
                    key,
                    e
                );
                continue;
            }
        };

        println!("\tSUCCESS");
        println!("\tE(msg:{:?}, key:{:?}) = {}", message, key, cipher_text);
        println!("\tD(msg:{:?}, key:{:?}) = {}", cipher_text, key, plain_text);
    }
}
