mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{product_items_pattern, QueryKey};
pub use patterns::pattern_matches;
pub use serialization::{decode, encode, SerializationError};
pub use traits::Cache;
