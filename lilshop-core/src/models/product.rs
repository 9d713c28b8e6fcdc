//! Product domain newtypes
//!
//! Names are free text (unlike slugs), so validation is length-based.
//! Prices and counts are range-checked at the boundary so the store
//! never sees a negative quantity or a NaN price.

use super::ValidationError;

/// Maximum length for product and supplier names
const MAX_NAME_LEN: usize = 128;

/// Validated product (or supplier) name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new name, rejecting empty and over-long values.
    ///
    /// # Example
    /// ```
    /// use lilshop_core::models::ProductName;
    ///
    /// assert!(ProductName::new("Widget A").is_ok());
    /// assert!(ProductName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "product name",
            });
        }

        if trimmed.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "product name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated supplier name, same length rules as product names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupplierName(String);

impl SupplierName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "supplier name",
            });
        }

        if trimmed.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "supplier name",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SupplierName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated monetary amount (unit price or supplier cost)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Create a price, rejecting NaN, infinities, and negatives.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field: "price" });
        }
        if value < 0.0 {
            return Err(ValidationError::Negative { field: "price" });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// Validated inventory count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count(i64);

impl Count {
    /// Create a count, rejecting negatives.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::Negative { field: "count" });
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}
