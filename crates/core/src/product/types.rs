use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ProductError;

/// Placeholder image shown for products that have no image of their own.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://notjustdev-dummy.s3.us-east-2.amazonaws.com/food/default.png";

/// A non-negative, finite currency amount.
///
/// Serialized as a bare JSON number, matching the store's `price` column.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Creates a price, rejecting negative and non-finite amounts.
    pub fn new(amount: f64) -> Result<Self, ProductError> {
        if !amount.is_finite() {
            return Err(ProductError::PriceNotFinite);
        }
        if amount < 0.0 {
            return Err(ProductError::NegativePrice(amount));
        }
        // Folds -0.0 into 0.0.
        Ok(Self(amount.abs()))
    }

    /// Returns the raw amount.
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = ProductError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", format_amount(self.0))
    }
}

/// Renders a non-negative amount with two decimals, rounding half-up from its
/// shortest decimal form so that `2.675` becomes `"2.68"`.
fn format_amount(amount: f64) -> String {
    let text = amount.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    format!("{}.{}", render(&digits[..split]), render(&digits[split..]))
}

/// A menu item as stored in the remote `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub price: Price,
    /// Image URI or storage reference, if one was uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Creates a product without an image.
    pub fn new(id: i64, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: None,
        }
    }

    /// Sets the image reference for this product.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the image to display, falling back to [`DEFAULT_PRODUCT_IMAGE`].
    pub fn display_image(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_PRODUCT_IMAGE)
    }
}

/// Input for creating a product. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewProduct {
    /// Creates an insert payload without an image.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            image: None,
        }
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds the stored record once an identifier has been assigned.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            image: self.image,
        }
    }
}

/// Input for updating a product: the target identifier plus the fields to change.
///
/// Fields left as `None` keep their current value. `image` is doubly optional:
/// `Some(None)` removes the image, `Some(Some(uri))` replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub image: Option<Option<String>>,
}

/// Maps a present field to `Some`, so that an explicit `null` becomes `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProductUpdate {
    /// Creates an update for `id` that changes nothing yet.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            price: None,
            image: None,
        }
    }

    /// Sets the new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new price.
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the new image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(Some(image.into()));
        self
    }

    /// Removes the product's image.
    pub fn clear_image(mut self) -> Self {
        self.image = Some(None);
        self
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.image.is_none()
    }

    /// Returns the body sent to the store: only the fields being changed.
    pub fn changes(&self) -> ProductChanges<'_> {
        ProductChanges {
            name: self.name.as_deref(),
            price: self.price,
            image: self.image.as_ref().map(Option::as_deref),
        }
    }

    /// Applies the changed fields to `product`, leaving the rest untouched.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
    }
}

/// Serialized body of an update request. A cleared image is sent as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductChanges<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<&'a str>>,
}
