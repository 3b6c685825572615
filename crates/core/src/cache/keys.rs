use std::fmt;

/// Prefix shared by every product query key.
const PRODUCT_PREFIX: &str = "product";

/// Identity of a cached query.
///
/// The collection and each item live in independent cache slots: invalidating
/// one never evicts the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full product list (`"product"`).
    ProductList,
    /// A single product by ID (`"product:{id}"`).
    Product(i64),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductList => f.write_str(PRODUCT_PREFIX),
            Self::Product(id) => write!(f, "{}:{}", PRODUCT_PREFIX, id),
        }
    }
}

/// Returns the pattern matching every single-product key, but not the list key.
pub fn product_items_pattern() -> String {
    format!("{}:*", PRODUCT_PREFIX)
}
