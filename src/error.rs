use thiserror::Error;

/// Errors that can occur while accessing segment data
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Errors {
    /// The segment has no payload attached yet
    #[error("No data was loaded or provided")]
    NoData,
    /// The provided buffer does not hold a usable payload for the segment
    #[error("The provided data buffer did not provide usable data")]
    InvalidBuffer,
    /// The reported size does not match the payload's length
    #[error("Segment size ({size} bytes) does not match its payload ({actual} bytes)")]
    SizeMismatch { size: usize, actual: usize },
}
