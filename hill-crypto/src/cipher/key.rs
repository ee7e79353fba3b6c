//! Validated Hill cipher keys.

use crate::errors::HillCipherError;
use crate::matrix::Matrix;
use crate::ring::Ring;

use num_integer::Roots;
use std::fmt;

/// A square matrix proven invertible for a specific ring.
///
/// The proof runs once, at construction; every later inversion against the
/// same ring is guaranteed to succeed. There is deliberately no way to build a
/// `Key` without the check, which is why deserialization goes through
/// [`Key::from_json`] instead of a serde derive.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Key {
    matrix: Matrix,
}

impl Key {
    /// Builds a key from row-major values.
    ///
    /// The number of values must be a perfect square, the resulting order at
    /// least 2, and the matrix invertible in the given ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::cipher::Key;
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// let key = Key::try_with(&[5, 15, 18, 20, 0, 11, 4, 26, 0], &ring).unwrap();
    /// assert_eq!(key.order(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// Every rejected property reports as `HillCipherError::InvalidKey`.
    pub fn try_with(values: &[i64], ring: &Ring) -> Result<Self, HillCipherError> {
        let order = values.len().sqrt();
        if order * order != values.len() {
            return Err(HillCipherError::InvalidKey(format!(
                "key length must be a square number, got {}",
                values.len()
            )));
        }

        let matrix = Matrix::try_with(order, values)?;
        Self::try_from_matrix(matrix, ring)
    }

    /// Wraps an existing matrix after checking the key invariants against the
    /// given ring.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidKey` when the matrix is malformed, of
    /// order < 2 or not invertible for the ring.
    pub fn try_from_matrix(matrix: Matrix, ring: &Ring) -> Result<Self, HillCipherError> {
        if !matrix.is_well_formed() {
            return Err(HillCipherError::InvalidKey(format!(
                "matrix data does not match its order {}",
                matrix.order()
            )));
        }
        if matrix.order() < 2 {
            return Err(HillCipherError::InvalidKey(format!(
                "cannot create a key of order {}, the minimum is 2",
                matrix.order()
            )));
        }
        if !matrix.is_invertible(ring) {
            return Err(HillCipherError::InvalidKey(format!(
                "key is not invertible modulo {}",
                ring.modulus()
            )));
        }
        Ok(Key { matrix })
    }

    /// Generates a random key of the given order, sampling residue matrices
    /// until one is invertible for the ring.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidKey` for orders below 2 and
    /// `HillCipherError::InternalError` when 1000 samples in a row fail the
    /// invertibility check.
    pub fn random(order: usize, ring: &Ring) -> Result<Self, HillCipherError> {
        if order < 2 {
            return Err(HillCipherError::InvalidKey(format!(
                "cannot create a key of order {}, the minimum is 2",
                order
            )));
        }

        for _ in 0..1000 {
            let values: Vec<i64> = (0..order * order)
                .map(|_| ring.residue(rand::random::<i64>()))
                .collect();
            let matrix = Matrix::try_with(order, &values)?;
            if matrix.is_invertible(ring) {
                return Ok(Key { matrix });
            }
        }
        Err(HillCipherError::InternalError(format!(
            "could not generate an invertible key of order {} after 1000 tries",
            order
        )))
    }

    /// Order of the key matrix, which is also the cipher block length.
    pub fn order(&self) -> usize {
        self.matrix.order()
    }

    /// The validated key matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Serializes the key matrix as JSON.
    pub fn to_json(&self) -> Result<String, HillCipherError> {
        Ok(serde_json::to_string(&self.matrix)?)
    }

    /// Rebuilds a key from [`Key::to_json`] output, re-running the full
    /// validation against the given ring.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::SerializationError` for unparsable JSON and
    /// `HillCipherError::InvalidKey` when the parsed matrix fails validation.
    pub fn from_json(json: &str, ring: &Ring) -> Result<Self, HillCipherError> {
        let matrix: Matrix = serde_json::from_str(json)?;
        Self::try_from_matrix(matrix, ring)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.matrix.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_creation() -> Result<(), HillCipherError> {
        // FORTALEZA over the Spanish alphabet
        let ring = Ring::try_with(27)?;
        let key = Key::try_with(&[5, 15, 18, 20, 0, 11, 4, 26, 0], &ring)?;
        assert_eq!(key.order(), 3);
        assert_eq!(
            key.matrix(),
            &Matrix::try_with(3, &[5, 15, 18, 20, 0, 11, 4, 26, 0])?
        );

        let ring = Ring::try_with(2)?;
        let key = Key::try_with(&[1, 0, 1, 1], &ring)?;
        assert_eq!(key.order(), 2);

        // UNAMFCIENCIASCYS over the Spanish alphabet
        let ring = Ring::try_with(27)?;
        let key = Key::try_with(
            &[21, 13, 0, 12, 5, 2, 8, 4, 13, 2, 8, 0, 19, 2, 25, 19],
            &ring,
        )?;
        assert_eq!(key.order(), 4);
        Ok(())
    }

    #[test]
    fn test_key_rejections() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(27)?;

        for values in [&[1, 2][..], &[1, 2, 3][..]] {
            assert!(matches!(
                Key::try_with(values, &ring),
                Err(HillCipherError::InvalidKey(_))
            ));
        }

        // orders 0 and 1 are too small to cipher with
        assert!(matches!(
            Key::try_with(&[], &ring),
            Err(HillCipherError::InvalidKey(_))
        ));
        assert!(matches!(
            Key::try_with(&[1], &ring),
            Err(HillCipherError::InvalidKey(_))
        ));

        // invertible mod 49 and 51 but not mod 50
        #[rustfmt::skip]
        let values = [
            6, 24, 44, 1, 15,
            13, 16, 48, 10, 23,
            20, 20, 17, 15, 23,
            1, 2, 9, 13, 0,
            48, 47, 46, 45, 44,
        ];
        assert!(Key::try_with(&values, &Ring::try_with(49)?).is_ok());
        assert!(matches!(
            Key::try_with(&values, &Ring::try_with(50)?),
            Err(HillCipherError::InvalidKey(_))
        ));
        Ok(())
    }

    #[test]
    fn test_key_display() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(2)?;
        let key = Key::try_with(&[1, 0, 1, 1], &ring)?;
        assert_eq!(key.to_string(), "|\t1\t|\t0\t|\n|\t1\t|\t1\t|\n");
        Ok(())
    }

    #[test]
    fn test_random_key() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(27)?;
        let key = Key::random(3, &ring)?;
        assert_eq!(key.order(), 3);
        assert!(key.matrix().is_invertible(&ring));

        assert!(matches!(
            Key::random(1, &ring),
            Err(HillCipherError::InvalidKey(_))
        ));
        Ok(())
    }

    #[test]
    fn test_json_round_trip() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(27)?;
        let key = Key::try_with(&[5, 15, 18, 20, 0, 11, 4, 26, 0], &ring)?;

        let json = key.to_json()?;
        let restored = Key::from_json(&json, &ring)?;
        assert_eq!(restored, key);
        Ok(())
    }

    #[test]
    fn test_from_json_validation() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(12)?;

        // shape and order survive parsing but fail validation
        let malformed = r#"{"order":2,"data":[[1,2],[3]]}"#;
        assert!(matches!(
            Key::from_json(malformed, &ring),
            Err(HillCipherError::InvalidKey(_))
        ));

        // det = -2, not a unit mod 12
        let singular = r#"{"order":2,"data":[[1,2],[3,4]]}"#;
        assert!(matches!(
            Key::from_json(singular, &ring),
            Err(HillCipherError::InvalidKey(_))
        ));

        assert!(matches!(
            Key::from_json("[", &ring),
            Err(HillCipherError::SerializationError(_))
        ));
        Ok(())
    }
}
