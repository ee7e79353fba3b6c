//! Running the cipher over arbitrary bytes.
//!
//! The cipher itself only speaks alphabet symbols, so binary data takes a detour:
//! it is PKCS#7 padded to a block size matched to the key order, Base64 encoded,
//! and the encoding is enciphered symbol-wise over the [`BASE64`] preset
//! alphabet. The padded length is kept a multiple of 3, which keeps `=` out of
//! the Base64 text and its length a multiple of the key order.

use crate::cipher::Cipher;
use crate::errors::HillCipherError;
use crate::preset::alphabets::BASE64;
use crate::ring::gcd;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use num_integer::Roots;

/// PKCS#7 stores the pad length in a single byte, capping the block size.
const MAX_PKCS7_BLOCK: usize = 255;

/// Adds PKCS#7 padding to the data to make its length a multiple of `block_size`.
///
/// Data that is already aligned gains a full block of padding, so unpadding is
/// always unambiguous.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::pad_pkcs7;
/// let mut data = vec![1, 2, 3, 4, 5];
/// pad_pkcs7(&mut data, 8);
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 3, 3, 3]);
/// ```
pub fn pad_pkcs7(data: &mut Vec<u8>, block_size: usize) {
    let padding_len = block_size - (data.len() % block_size);
    let padding_val = padding_len as u8;
    for _ in 0..padding_len {
        data.push(padding_val);
    }
}

/// Removes PKCS#7 padding from the data.
///
/// # Errors
///
/// Returns `HillCipherError::DecodingError` if the padding is invalid (empty
/// data, out-of-range padding value or mismatched padding bytes).
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::unpad_pkcs7;
/// let mut data = vec![1, 2, 3, 4, 5, 3, 3, 3];
/// unpad_pkcs7(&mut data).unwrap();
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn unpad_pkcs7(data: &mut Vec<u8>) -> Result<(), HillCipherError> {
    let padding_val = match data.last() {
        None => {
            return Err(HillCipherError::DecodingError(
                "cannot unpad empty data".to_string(),
            ));
        }
        Some(&value) => value as usize,
    };
    if padding_val == 0 || padding_val > data.len() {
        return Err(HillCipherError::DecodingError(
            "invalid PKCS#7 padding value".to_string(),
        ));
    }
    for &byte in data.iter().skip(data.len() - padding_val) {
        if byte as usize != padding_val {
            return Err(HillCipherError::DecodingError(
                "invalid PKCS#7 padding bytes".to_string(),
            ));
        }
    }
    data.truncate(data.len() - padding_val);
    Ok(())
}

/// Byte block size for a key of the given order: the smallest multiple of 3
/// whose Base64 expansion has a length divisible by the order.
fn block_bytes(order: usize) -> Result<usize, HillCipherError> {
    let block = 3 * order / gcd(4, order as i64) as usize;
    if block > MAX_PKCS7_BLOCK {
        return Err(HillCipherError::EncodingError(format!(
            "key order {} needs {}-byte blocks, above the PKCS#7 limit of {}",
            order, block, MAX_PKCS7_BLOCK
        )));
    }
    Ok(block)
}

/// Pre-computes the key order from the key text length so the padding block can
/// be sized; the cipher re-validates the key in full.
fn key_order(key: &str) -> Result<usize, HillCipherError> {
    let len = key.chars().count();
    let order = len.sqrt();
    if order * order != len || order < 2 {
        return Err(HillCipherError::InvalidKey(format!(
            "key length must be a square number of at least 4, got {}",
            len
        )));
    }
    Ok(order)
}

/// Encrypts arbitrary bytes with a key written in the Base64 alphabet.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::{decrypt_bytes, encrypt_bytes};
/// let cipher_text = encrypt_bytes(b"hello world", "Base").unwrap();
/// assert_eq!(decrypt_bytes(&cipher_text, "Base").unwrap(), b"hello world");
/// ```
///
/// # Errors
///
/// Fails for keys the cipher rejects over the [`BASE64`] alphabet, and with
/// `HillCipherError::EncodingError` for key orders whose byte blocks exceed
/// what PKCS#7 can pad.
pub fn encrypt_bytes(data: &[u8], key: &str) -> Result<String, HillCipherError> {
    let cipher = Cipher::try_with(BASE64.clone())?;

    // 1. Pad the bytes to the block size matched to the key order
    let mut padded = data.to_vec();
    pad_pkcs7(&mut padded, block_bytes(key_order(key)?)?);

    // 2. Encode and encipher; the padded length guarantees block alignment
    let encoded = STANDARD.encode(&padded);
    cipher.encrypt(&encoded, key)
}

/// Decrypts [`encrypt_bytes`] output back into the original bytes.
///
/// # Errors
///
/// Same key failures as [`encrypt_bytes`], plus
/// `HillCipherError::DecodingError` when the deciphered text is not valid
/// Base64 or carries broken padding, which is what decrypting with the wrong
/// key usually comes down to.
pub fn decrypt_bytes(cipher_text: &str, key: &str) -> Result<Vec<u8>, HillCipherError> {
    let cipher = Cipher::try_with(BASE64.clone())?;

    // 1. Decipher back to Base64 text
    let encoded = cipher.decrypt(cipher_text, key)?;

    // 2. Decode and unpad
    let mut data = STANDARD
        .decode(&encoded)
        .map_err(|e| HillCipherError::DecodingError(format!("Base64 decoding failed: {}", e)))?;
    unpad_pkcs7(&mut data)?;
    Ok(data)
}
