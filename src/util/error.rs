/// Error type for zukaku-rs operations.
#[derive(Debug, PartialEq)]
pub enum ZukakuError {
    /// The plane rectangular zone number is outside the valid range (1-13).
    InvalidZone(u8),
    /// CRS resolution or coordinate transform failed.
    TransformError(String),
    /// No sheet with the given code exists in the current set.
    SheetNotFound(String),
    /// 1:2500 sheets have no finer subdivision.
    FinestLevel,
    /// File I/O error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
}

impl std::fmt::Display for ZukakuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZukakuError::InvalidZone(n) => write!(f, "Invalid zone number: {} (expected 1-13)", n),
            ZukakuError::TransformError(msg) => write!(f, "Transform error: {}", msg),
            ZukakuError::SheetNotFound(code) => write!(f, "Sheet not found: {}", code),
            ZukakuError::FinestLevel => write!(f, "1:2500 sheets cannot be subdivided"),
            ZukakuError::IoError(msg) => write!(f, "IO error: {}", msg),
            ZukakuError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for ZukakuError {}
