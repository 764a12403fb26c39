use thiserror::Error;

/// Field-shape violations detected before a write reaches the store.
///
/// Each variant names the offending field in its message so the client can
/// surface the failure next to the right input. Produced by
/// `StudentParams::from_dto` and mapped to 422 Unprocessable Entity.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// `full_name` is empty or longer than 50 characters.
    #[error("full_name must be between 1 and 50 characters, got {len}")]
    FullNameLength { len: usize },

    /// `full_name` contains something other than letters and spaces.
    #[error("full_name may only contain letters and spaces")]
    FullNameCharset,

    /// `father_name` is empty or longer than 50 characters.
    #[error("father_name must be between 1 and 50 characters, got {len}")]
    FatherNameLength { len: usize },

    /// `father_name` contains something other than letters and spaces.
    #[error("father_name may only contain letters and spaces")]
    FatherNameCharset,

    /// `age` is outside the 15-30 admission range.
    #[error("age must be between 15 and 30, got {age}")]
    AgeRange { age: i32 },

    /// `phone` is not exactly 11 digits.
    #[error("phone must be exactly 11 digits")]
    Phone,

    /// `email` is not structurally a valid email address.
    #[error("email '{value}' is not a valid email address")]
    Email { value: String },

    /// `address` is empty or longer than 100 characters.
    #[error("address must be between 1 and 100 characters, got {len}")]
    AddressLength { len: usize },
}
