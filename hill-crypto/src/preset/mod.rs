//! # Preset Module
//!
//! Ready-made [`Alphabet`](crate::cipher::Alphabet) values for common symbol
//! sets.

pub mod alphabets;

pub use alphabets::{
    BASE64, BASE64_SYMBOLS, BINARY, ENGLISH_LOWERCASE, ENGLISH_UPPERCASE, HEX_UPPERCASE,
    SPANISH_UPPERCASE,
};
