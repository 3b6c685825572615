mod error;
mod http_mapping;
mod rows;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::{remote_error_from_response, RemoteErrorBody};
pub use rows::single_row;
pub use traits::ProductStore;
