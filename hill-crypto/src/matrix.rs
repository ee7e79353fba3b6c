//! Square integer matrices and the modular operations the cipher needs.

use crate::errors::HillCipherError;
use crate::ring::Ring;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;

/// A square matrix of signed integers, stored row-major.
///
/// Matrices are value-like: every operation returns a fresh matrix and never
/// mutates `self`. The order-0 matrix is a valid degenerate value; it only
/// shows up as the minor of an order-1 matrix.
///
/// # Example
///
/// ```
/// # use hill_crypto::matrix::Matrix;
/// let m = Matrix::try_with(2, &[1, 3, 9, -1]).unwrap();
/// assert_eq!(m.determinant().unwrap(), -28);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    order: usize,
    data: Vec<Vec<i64>>,
}

impl Matrix {
    /// Builds an order × order matrix from row-major values.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::SizeMismatch` when the number of values is not
    /// the square of the order.
    pub fn try_with(order: usize, values: &[i64]) -> Result<Self, HillCipherError> {
        if values.len() != order * order {
            return Err(HillCipherError::SizeMismatch(format!(
                "matrix order ({}) does not match data length ({})",
                order,
                values.len()
            )));
        }

        if order == 0 {
            return Ok(Matrix {
                order,
                data: Vec::new(),
            });
        }

        let data = values.chunks(order).map(|row| row.to_vec()).collect();
        Ok(Matrix { order, data })
    }

    /// Returns the order (side length) of the matrix.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.data
    }

    /// Whether the data actually holds `order` rows of `order` entries each.
    ///
    /// Constructors guarantee this; values coming out of deserialization must be
    /// re-checked before use.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.order && self.data.iter().all(|row| row.len() == self.order)
    }

    /// Computes the determinant by Laplace expansion along the first row.
    ///
    /// The expansion is the textbook O(n!) algorithm. That is plenty for the
    /// small key orders the cipher works with and keeps the arithmetic easy to
    /// follow; large orders are where it stops being practical.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::UndefinedDeterminant` for matrices of order < 1.
    pub fn determinant(&self) -> Result<i64, HillCipherError> {
        if self.order < 1 {
            return Err(HillCipherError::UndefinedDeterminant);
        }
        if self.order == 1 {
            return Ok(self.data[0][0]);
        }

        let mut det = 0;
        let mut sign = 1;
        for j in 0..self.order {
            // minors along the first row always exist for order >= 2
            let minor = self.minor(0, j)?;
            det += sign * self.data[0][j] * minor.determinant()?;
            sign = -sign;
        }
        Ok(det)
    }

    /// Returns the minor of the matrix at position (p, q), the submatrix left
    /// after deleting row p and column q.
    ///
    /// The minor of an order-1 matrix is the order-0 matrix.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::IndexOutOfBounds` when p or q is not a valid
    /// position.
    pub fn minor(&self, p: usize, q: usize) -> Result<Matrix, HillCipherError> {
        if p >= self.order || q >= self.order {
            return Err(HillCipherError::IndexOutOfBounds(format!(
                "invalid position ({}, {}) for a matrix of order {}",
                p, q, self.order
            )));
        }
        if self.order <= 1 {
            return Ok(Matrix {
                order: 0,
                data: Vec::new(),
            });
        }

        let mut data = Vec::with_capacity(self.order - 1);
        for (i, row) in self.data.iter().enumerate() {
            if i == p {
                continue;
            }
            let mut out = Vec::with_capacity(self.order - 1);
            for (j, &value) in row.iter().enumerate() {
                if j == q {
                    continue;
                }
                out.push(value);
            }
            data.push(out);
        }
        Ok(Matrix {
            order: self.order - 1,
            data,
        })
    }

    /// Computes the cofactor matrix, entry (i, j) being
    /// `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::UndefinedDeterminant` for matrices of order < 2,
    /// whose minors have no determinant.
    pub fn cofactor(&self) -> Result<Matrix, HillCipherError> {
        if self.order < 2 {
            return Err(HillCipherError::UndefinedDeterminant);
        }

        let mut data = vec![vec![0; self.order]; self.order];
        for i in 0..self.order {
            for j in 0..self.order {
                let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                data[i][j] = sign * self.minor(i, j)?.determinant()?;
            }
        }
        Ok(Matrix {
            order: self.order,
            data,
        })
    }

    /// Returns the transpose. Always succeeds, the order-0 matrix included.
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![vec![0; self.order]; self.order];
        for i in 0..self.order {
            for j in 0..self.order {
                data[j][i] = self.data[i][j];
            }
        }
        Matrix {
            order: self.order,
            data,
        }
    }

    /// Computes the adjoint (adjugate), the transpose of the cofactor matrix.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`Matrix::cofactor`] fails.
    pub fn adjoint(&self) -> Result<Matrix, HillCipherError> {
        Ok(self.cofactor()?.transpose())
    }

    /// Whether the matrix is invertible in the given ring.
    ///
    /// Requires every entry to already be a canonical residue of the ring, the
    /// determinant to exist, and the determinant's residue to be a unit. Never
    /// errors; any failed requirement answers false.
    pub fn is_invertible(&self, ring: &Ring) -> bool {
        let modulus = ring.modulus() as i64;
        for row in &self.data {
            for &value in row {
                if value < 0 || value >= modulus {
                    return false;
                }
            }
        }

        match self.determinant() {
            Ok(det) => ring.is_unit(det),
            Err(_) => false,
        }
    }

    /// Computes the modular inverse of the matrix in the given ring, through
    /// the adjugate: `inverse = det(A)^-1 * adj(A)` entry-wise in the ring.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` when [`Matrix::is_invertible`]
    /// answers false. An order-1 matrix can pass that gate and still fail here,
    /// since its adjoint is undefined.
    pub fn inverse(&self, ring: &Ring) -> Result<Matrix, HillCipherError> {
        if !self.is_invertible(ring) {
            return Err(HillCipherError::NotInvertible(ring.modulus()));
        }

        // the gate above guarantees the determinant exists and is a unit
        let det = self.determinant()?;
        let det_inverse = ring.inv(det)?;
        let adjoint = self.adjoint()?;

        let mut data = vec![vec![0; self.order]; self.order];
        for i in 0..self.order {
            for j in 0..self.order {
                data[i][j] = ring.mul(adjoint.data[i][j], det_inverse);
            }
        }
        Ok(Matrix {
            order: self.order,
            data,
        })
    }

    /// Computes `A * x` in the given ring, every component reduced to its
    /// canonical residue.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::SizeMismatch` when the vector length differs
    /// from the matrix order.
    pub fn vector_product(&self, vector: &[i64], ring: &Ring) -> Result<Vector, HillCipherError> {
        if vector.len() != self.order {
            return Err(HillCipherError::SizeMismatch(format!(
                "vector length ({}) must be equal to matrix order ({})",
                vector.len(),
                self.order
            )));
        }

        let mut result = vec![0; self.order];
        for i in 0..self.order {
            let mut sum = 0;
            for j in 0..self.order {
                let term = ring.mul(self.data[i][j], vector[j]);
                sum = ring.add(sum, term);
            }
            result[i] = sum;
        }
        Ok(result)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "|\t{}\t|", row.iter().join("\t|\t"))?;
        }
        Ok(())
    }
}
