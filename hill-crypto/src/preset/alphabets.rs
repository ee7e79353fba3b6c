use crate::cipher::Alphabet;

use lazy_static::lazy_static;

/// The standard Base64 symbols (A-Z, a-z, 0-9, +, /) plus the `=` padding
/// character, in index order.
pub const BASE64_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

lazy_static! {
    /// The 27-letter uppercase Spanish alphabet: A-Z with Ñ after N, no
    /// diacritics.
    pub static ref SPANISH_UPPERCASE: Alphabet = Alphabet::new("ABCDEFGHIJKLMNÑOPQRSTUVWXYZ");

    /// The uppercase English alphabet.
    pub static ref ENGLISH_UPPERCASE: Alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// The lowercase English alphabet.
    pub static ref ENGLISH_LOWERCASE: Alphabet = Alphabet::new("abcdefghijklmnopqrstuvwxyz");

    /// Uppercase hexadecimal digits.
    pub static ref HEX_UPPERCASE: Alphabet = Alphabet::new("0123456789ABCDEF");

    /// Binary digits, the smallest alphabet a cipher accepts.
    pub static ref BINARY: Alphabet = Alphabet::new("01");

    /// All 65 Base64 symbols. This is the alphabet the byte codec runs the
    /// cipher over; `=` is included so unaligned Base64 text still belongs.
    pub static ref BASE64: Alphabet = Alphabet::new(BASE64_SYMBOLS);
}
