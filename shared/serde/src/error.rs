use thiserror::Error;

/// Errors that can occur while reading values back out of a bit buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The reader ran past the end of the underlying buffer
    #[error("Attempted to read past the end of the buffer ({bits_read} bits already read)")]
    BufferUnderrun { bits_read: usize },

    /// A length-prefixed string did not contain valid UTF-8
    #[error("String field of {length} bytes is not valid UTF-8")]
    InvalidUtf8 { length: usize },

    /// A decoded integer does not fit the type it is being read into
    #[error("Decoded value {value} is out of range for {type_name}")]
    OutOfRange {
        value: i128,
        type_name: &'static str,
    },
}
