//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCipherError;

use super::helper;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_n using modular arithmetic.
///
/// For the Hill cipher the modulus is the alphabet size, so the smallest
/// meaningful ring is Z_2.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Canonical residue of a value, within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.residue(87), 9);
    /// assert_eq!(ring.residue(-38), 14);
    /// assert_eq!(ring.residue(-26), 0);
    /// assert_eq!(ring.residue(0), 0);
    /// ```
    pub fn residue(&self, value: i64) -> i64 {
        helper::residue(value, self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// assert_eq!(ring.add(12, 13), 5);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_res = self.residue(a);
        let b_res = self.residue(b);

        self.residue(a_res.wrapping_add(b_res))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.sub(7, 5), 2);
    /// assert_eq!(ring.sub(3, 5), 8);
    /// assert_eq!(ring.sub(-2, 3), 5);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_res = self.residue(a);
        let b_res = self.residue(b);

        self.residue(a_res.wrapping_sub(b_res))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(-2, 6), 8); // -12 mod 10 = 8
    /// assert_eq!(ring.mul(4, 5), 0); // 20 mod 10 = 0
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_res = self.residue(a);
        let b_res = self.residue(b);

        let result = (a_res as i128 * b_res as i128) % (self.modulus as i128);

        self.residue(result as i64)
    }

    /// Computes the additive inverse `-a mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.neg(3), 7);
    /// assert_eq!(ring.neg(0), 0);
    /// assert!(ring.add(3, ring.neg(3)) == 0);
    /// ```
    pub fn neg(&self, a: i64) -> i64 {
        if a == 0 {
            return 0;
        }

        self.residue(((-a as i128) % self.modulus as i128) as _)
    }

    /// Whether the residue of `a` is a unit of the ring.
    ///
    /// Units are exactly the values with a multiplicative inverse.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(12).unwrap();
    /// assert!(ring.is_unit(5)); // gcd(5, 12) = 1
    /// assert!(!ring.is_unit(3)); // gcd(3, 12) = 3
    /// assert!(!ring.is_unit(0));
    /// ```
    pub fn is_unit(&self, a: i64) -> bool {
        helper::is_unit(self.residue(a), self.modulus as i64)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotCoprime` if the inverse does not exist
    /// (i.e., `gcd(a, modulus) != 1`), which includes `a == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(3).unwrap(), 9); // 3 * 9 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(9).unwrap(), 3);
    /// assert!(ring.inv(2).is_err()); // gcd(2, 26) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCipherError> {
        helper::modular_inverse(self.residue(a), self.modulus as i64)
    }
}
