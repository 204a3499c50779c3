//! NetpathErrorCode trait for the service boundary.

/// Stable error codes for whatever layer serializes netpath errors.
/// Every error enum implements this so a facade can map errors to
/// status codes without matching on display strings.
pub trait NetpathErrorCode {
    /// Returns the error code string (e.g., "NODE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const PATH_NOT_FOUND: &str = "PATH_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const CONCURRENCY_ERROR: &str = "CONCURRENCY_ERROR";
