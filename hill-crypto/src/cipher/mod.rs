//! # Hill Cipher
//!
//! A polygraphic substitution cipher that encrypts messages through matrix
//! transformations. The message is cut into blocks of symbol indices, each
//! block is multiplied by an invertible key matrix in the ring Z_n (n being
//! the alphabet size), and the resulting indices map back to symbols.
//!
//! The Hill cipher is broken by known-plaintext attacks. Don't use it for any
//! purpose other than experimentation and education.

pub mod alphabet;
pub mod key;

pub use alphabet::Alphabet;
pub use key::Key;

use crate::errors::HillCipherError;
use crate::matrix::Matrix;
use crate::ring::Ring;

/// An instance of the Hill cipher bound to a specific alphabet.
///
/// The alphabet size is the modulus of every matrix operation the cipher runs.
#[derive(Debug, Clone)]
pub struct Cipher {
    ring: Ring,
    alphabet: Alphabet,
}

impl Cipher {
    /// Creates a cipher over the given alphabet.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::AlphabetTooSmall` for alphabets of fewer than
    /// 2 symbols; nothing can be enciphered in a ring smaller than Z_2.
    pub fn try_with(alphabet: Alphabet) -> Result<Self, HillCipherError> {
        if alphabet.len() < 2 {
            return Err(HillCipherError::AlphabetTooSmall(alphabet.len()));
        }
        let ring = Ring::try_with(alphabet.len() as u64)?;
        Ok(Cipher { ring, alphabet })
    }

    /// The alphabet the cipher works over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The ring Z_n the cipher computes in, n being the alphabet size.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Encrypts a plain text with the given key text.
    ///
    /// # Errors
    ///
    /// Fails when the message or key uses symbols outside the alphabet
    /// (`BadSymbol`), the key does not spell a valid key matrix (`InvalidKey`)
    /// or the message length is not a multiple of the key order
    /// (`MessageNotBlockAligned`).
    pub fn encrypt(&self, message: &str, key: &str) -> Result<String, HillCipherError> {
        let (key, symbols) = self.verify_key_text_pair(message, key)?;
        self.transform(key.matrix(), &symbols)
    }

    /// Decrypts a cipher text with the given key text.
    ///
    /// # Errors
    ///
    /// Same failures as [`Cipher::encrypt`], plus `KeyNotInvertible` should the
    /// key matrix fail to invert. A key that passed verification inverts for
    /// this cipher's ring, so that last failure indicates a bug rather than bad
    /// input.
    pub fn decrypt(&self, cipher_text: &str, key: &str) -> Result<String, HillCipherError> {
        let (key, symbols) = self.verify_key_text_pair(cipher_text, key)?;
        let inverse = key.matrix().inverse(&self.ring).map_err(|e| {
            HillCipherError::KeyNotInvertible(format!("failed to invert key matrix: {}", e))
        })?;
        self.transform(&inverse, &symbols)
    }

    /// Generates a random key of the given order, written in the alphabet.
    ///
    /// The result is always accepted back by [`Cipher::encrypt`] and
    /// [`Cipher::decrypt`] for block-aligned messages.
    pub fn generate_key(&self, order: usize) -> Result<String, HillCipherError> {
        let key = Key::random(order, &self.ring)?;
        let mut text = String::with_capacity(order * order);
        for row in key.matrix().rows() {
            for &index in row {
                text.push(self.alphabet.symbol_at(index)?);
            }
        }
        Ok(text)
    }

    /// Makes sure the key and the text are usable with the current cipher.
    /// Returns the key and the text's symbols if valid.
    fn verify_key_text_pair(
        &self,
        text: &str,
        key: &str,
    ) -> Result<(Key, Vec<char>), HillCipherError> {
        if !self.alphabet.belongs(text) {
            return Err(HillCipherError::BadSymbol(format!(
                "message {:?} does not belong to alphabet {:?}",
                text,
                self.alphabet.to_string()
            )));
        }
        if !self.alphabet.belongs(key) {
            return Err(HillCipherError::BadSymbol(format!(
                "key {:?} does not belong to alphabet {:?}",
                key,
                self.alphabet.to_string()
            )));
        }

        let mut indices = Vec::new();
        for symbol in key.chars() {
            indices.push(self.alphabet.index_of(symbol)?);
        }
        let key_text = key;
        let key = Key::try_with(&indices, &self.ring).map_err(|e| {
            HillCipherError::InvalidKey(format!("failed to create a key from {:?}: {}", key_text, e))
        })?;

        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() % key.order() != 0 {
            return Err(HillCipherError::MessageNotBlockAligned {
                len: symbols.len(),
                order: key.order(),
            });
        }
        Ok((key, symbols))
    }

    /// Applies the matrix to every block of the text. Assumes the pair
    /// verification already ran, though lookups still propagate errors.
    fn transform(&self, matrix: &Matrix, symbols: &[char]) -> Result<String, HillCipherError> {
        let mut result = String::with_capacity(symbols.len());
        for block in symbols.chunks(matrix.order()) {
            let mut vector = Vec::with_capacity(block.len());
            for &symbol in block {
                vector.push(self.alphabet.index_of(symbol)?);
            }
            for index in matrix.vector_product(&vector, &self.ring)? {
                result.push(self.alphabet.symbol_at(index)?);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPANISH: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

    #[test]
    fn test_cipher_creation() -> Result<(), HillCipherError> {
        let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;
        assert_eq!(cipher.ring().modulus(), 27);
        assert_eq!(cipher.alphabet().len(), 27);

        let cipher = Cipher::try_with(Alphabet::new("01"))?;
        assert_eq!(cipher.ring().modulus(), 2);
        Ok(())
    }

    #[test]
    fn test_cipher_rejects_tiny_alphabets() {
        assert!(matches!(
            Cipher::try_with(Alphabet::new("A")),
            Err(HillCipherError::AlphabetTooSmall(1))
        ));
        assert!(matches!(
            Cipher::try_with(Alphabet::new("")),
            Err(HillCipherError::AlphabetTooSmall(0))
        ));
    }

    #[test]
    fn test_encrypt_rejects_foreign_symbols() -> Result<(), HillCipherError> {
        let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;

        // the message is checked before the key
        assert!(matches!(
            cipher.encrypt("message", "FORTALEZA"),
            Err(HillCipherError::BadSymbol(_))
        ));
        assert!(matches!(
            cipher.encrypt("MESSAGE", "fortaleza"),
            Err(HillCipherError::BadSymbol(_))
        ));
        Ok(())
    }

    #[test]
    fn test_encrypt_rejects_bad_keys() -> Result<(), HillCipherError> {
        let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;

        // two symbols cannot fill a square matrix
        assert!(matches!(
            cipher.encrypt("MESSAGE", "AB"),
            Err(HillCipherError::InvalidKey(_))
        ));

        // indices 0..9 spell a singular matrix
        assert!(matches!(
            cipher.encrypt("CONSUL", "ABCDEFGHI"),
            Err(HillCipherError::InvalidKey(_))
        ));
        Ok(())
    }

    #[test]
    fn test_encrypt_rejects_misaligned_messages() -> Result<(), HillCipherError> {
        let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;
        assert!(matches!(
            cipher.encrypt("MESSAGES", "FORTALEZA"),
            Err(HillCipherError::MessageNotBlockAligned { len: 8, order: 3 })
        ));
        Ok(())
    }

    #[test]
    fn test_decrypt_verifies_the_pair_too() -> Result<(), HillCipherError> {
        let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;
        assert!(matches!(
            cipher.decrypt("KUTÑOB", "fortaleza"),
            Err(HillCipherError::BadSymbol(_))
        ));
        assert!(matches!(
            cipher.decrypt("KUTÑO", "FORTALEZA"),
            Err(HillCipherError::MessageNotBlockAligned { len: 5, order: 3 })
        ));
        Ok(())
    }

    #[test]
    fn test_generate_key() -> Result<(), HillCipherError> {
        let cipher = Cipher::try_with(Alphabet::new(SPANISH))?;
        let key = cipher.generate_key(3)?;
        assert_eq!(key.chars().count(), 9);
        assert!(cipher.alphabet().belongs(&key));

        let cipher_text = cipher.encrypt("CONSUL", &key)?;
        assert_eq!(cipher.decrypt(&cipher_text, &key)?, "CONSUL");
        Ok(())
    }
}
