//! An educational implementation of the Hill cipher over arbitrary alphabets.
//!
//! The Hill cipher is a classical polygraphic substitution cipher built on
//! linear algebra: messages are cut into blocks of symbol indices, each block
//! is multiplied by an invertible key matrix modulo the alphabet size, and the
//! resulting indices spell the cipher text. Decryption multiplies by the
//! modular inverse of the key matrix.
//!
//! The cipher has been broken for a century; known-plaintext attacks recover
//! the key with basic linear algebra. This crate exists for studying that
//! linear algebra, never for protecting data.
//!
//! # Example
//!
//! ```
//! use hill_crypto::cipher::{Alphabet, Cipher};
//! # use hill_crypto::errors::HillCipherError;
//! # fn main() -> Result<(), HillCipherError> {
//! let cipher = Cipher::try_with(Alphabet::new("ABCDEFGHIJKLMNÑOPQRSTUVWXYZ"))?;
//!
//! let cipher_text = cipher.encrypt("CONSUL", "FORTALEZA")?;
//! assert_eq!(cipher_text, "KUTÑOB");
//!
//! assert_eq!(cipher.decrypt(&cipher_text, "FORTALEZA")?, "CONSUL");
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod matrix;
pub mod preset;
pub mod ring;
