use crate::errors::HillCipherError;

/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
///
/// The signs of x and y follow truncated division; callers should rely on the
/// Bezout identity only.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

/// Canonical residue of `value` modulo `modulus`, in `[0, modulus)` for a
/// positive modulus.
pub fn residue(value: i64, modulus: i64) -> i64 {
    let rem = value % modulus;
    if rem < 0 { rem + modulus } else { rem }
}

/// Whether `value` is a unit modulo `modulus`, meaning gcd(value, modulus) == 1.
pub fn is_unit(value: i64, modulus: i64) -> bool {
    gcd(value, modulus) == 1
}

/// Finds the inverse of `value` modulo `modulus`, as a canonical residue.
///
/// Modulus 1 is the zero ring where 0 is its own inverse, so 0 is returned for
/// every value. Fails with [`HillCipherError::NotCoprime`] when no inverse
/// exists.
pub fn modular_inverse(value: i64, modulus: i64) -> Result<i64, HillCipherError> {
    if modulus == 1 {
        return Ok(0);
    }

    let value = residue(value, modulus);
    let (g, x, _) = extended_gcd(value, modulus);
    if g != 1 {
        return Err(HillCipherError::NotCoprime(value, modulus));
    }
    Ok(residue(x, modulus))
}
