//! Error handling for netpath.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod netpath_error;
pub mod search_error;

pub use config_error::ConfigError;
pub use error_code::NetpathErrorCode;
pub use netpath_error::{NetpathError, NetpathResult};
pub use search_error::SearchError;
