//! Domain error types.

mod api_error;
mod navigation_error;
mod storage_error;

pub use api_error::{ApiError, TokenLookupError};
pub use navigation_error::NavigationError;
pub use storage_error::StorageError;
