pub mod grouping;
pub mod http;
pub mod operations;

pub use grouping::{DEFAULT_TAG, OperationsByTag, extract_operations};
pub use http::{HttpFile, HttpFiles, HttpRequest};
pub use operations::{HttpMethod, OperationInfo};
