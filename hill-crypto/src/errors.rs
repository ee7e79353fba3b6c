#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// Error when flat matrix data does not match the declared order, or a vector
    /// does not match the matrix it multiplies.
    #[error("SizeMismatch: {0}")]
    SizeMismatch(String),
    /// Error when asking for the determinant of a matrix of order < 1.
    #[error("determinant is undefined for matrices of order < 1")]
    UndefinedDeterminant,
    #[error("IndexOutOfBounds: {0}")]
    IndexOutOfBounds(String),
    /// Error when inverting a matrix that is not invertible for the given modulus.
    #[error("matrix is not invertible modulo {0}")]
    NotInvertible(u64),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("{0} has no inverse modulo {1}, they are not coprime")]
    NotCoprime(i64, i64),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("an alphabet needs at least 2 symbols, got {0}")]
    AlphabetTooSmall(usize),
    #[error("BadSymbol: {0}")]
    BadSymbol(String),
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    #[error("message of {len} symbols cannot be split into blocks of {order}")]
    MessageNotBlockAligned { len: usize, order: usize },
    #[error("KeyNotInvertible: {0}")]
    KeyNotInvertible(String),

    #[error("EncodingError: {0}")]
    EncodingError(String),
    #[error("DecodingError: {0}")]
    DecodingError(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
