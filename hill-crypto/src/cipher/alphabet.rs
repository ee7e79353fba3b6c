//! Symbol tables mapping characters to the dense indices the matrices consume.

use crate::errors::HillCipherError;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An ordered set of symbols, each mapped to its position `0..n`.
///
/// The alphabet is the value domain of a cipher: its length becomes the ring
/// modulus and every message and key must be spelled with its symbols. Symbols
/// are expected to be unique; a duplicate would break the symbol/index
/// bijection and is not checked for.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
    index_by_symbol: HashMap<char, i64>,
}

impl Alphabet {
    /// Builds the alphabet from the characters of `symbols`, in order.
    pub fn new(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let index_by_symbol = symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| (symbol, i as i64))
            .collect();
        Alphabet {
            symbols,
            index_by_symbol,
        }
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in index order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether the symbol is defined in the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.index_by_symbol.contains_key(&symbol)
    }

    /// Whether every character of the text is a symbol of the alphabet.
    ///
    /// The empty text belongs to every alphabet.
    pub fn belongs(&self, text: &str) -> bool {
        text.chars().all(|symbol| self.contains(symbol))
    }

    /// Returns the index of the given symbol.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::BadSymbol` when the symbol is not part of the
    /// alphabet.
    pub fn index_of(&self, symbol: char) -> Result<i64, HillCipherError> {
        match self.index_by_symbol.get(&symbol) {
            Some(&index) => Ok(index),
            None => Err(HillCipherError::BadSymbol(format!(
                "symbol {:?} is not part of the alphabet",
                symbol
            ))),
        }
    }

    /// Returns the symbol at the given index.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::IndexOutOfBounds` for indices outside
    /// `[0, len)`.
    pub fn symbol_at(&self, index: i64) -> Result<char, HillCipherError> {
        if index < 0 || index >= self.symbols.len() as i64 {
            return Err(HillCipherError::IndexOutOfBounds(format!(
                "index {} cannot be mapped to a symbol",
                index
            )));
        }
        Ok(self.symbols[index as usize])
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols.iter().collect::<String>())
    }
}
