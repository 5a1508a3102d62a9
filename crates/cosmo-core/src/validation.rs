//! # Validation Module
//!
//! Form validation for Cosmo Stock.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Product dialog (graphical layer)                             │
//! │  └── Collects raw text: code, name, description, date, category, image │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Desktop command (Rust)                                       │
//! │  └── THIS MODULE: required fields, formats, closed category set        │
//! │      Create and Edit use distinct, named policies                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── UNIQUE(code). Nothing else: the store accepts any category text   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cosmo_core::validation::{ProductForm, ValidationPolicy};
//!
//! let form = ProductForm {
//!     code: "LIP-204".to_string(),
//!     name: "Velvet Lipstick".to_string(),
//!     description: "Matte finish".to_string(),
//!     expiration_date: "2026-05-01".to_string(),
//!     category: "Makeup".to_string(),
//!     image_path: String::new(),
//! };
//!
//! // Editing without an image is fine, creating is not
//! assert!(form.validate(ValidationPolicy::Edit).is_ok());
//! assert!(form.validate(ValidationPolicy::Create).is_err());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Category, NewProduct};
use crate::DATE_FORMAT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_CODE_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// Policies
// =============================================================================

/// Which save flow a form is validated for.
///
/// The two flows intentionally differ:
/// - `Create` requires an image, `Edit` keeps whatever the record had.
/// - Code uniqueness is not a form rule. Both the add and edit commands
///   look the code up in the store before staging an image, and the
///   UNIQUE constraint backs that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    Create,
    Edit,
}

impl ValidationPolicy {
    /// Whether an image must be selected to save.
    pub const fn requires_image(&self) -> bool {
        matches!(self, ValidationPolicy::Create)
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw values from the add/edit product dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub code: String,
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by the date picker.
    pub expiration_date: String,
    pub category: String,
    /// Path of the picked image, or of the stored copy when editing.
    /// Empty when nothing was picked.
    pub image_path: String,
}

impl ProductForm {
    /// Pre-fills a form from a stored product, as the edit dialog does.
    pub fn from_product(product: &crate::Product) -> Self {
        ProductForm {
            code: product.code.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            expiration_date: product.expiration_label(),
            category: product.category.clone(),
            image_path: product.image_path.clone(),
        }
    }

    /// Checks every field under `policy` and returns the record to persist.
    ///
    /// The returned `image_path` is still the picked path; staging it into
    /// the asset directory is the caller's job.
    pub fn validate(&self, policy: ValidationPolicy) -> ValidationResult<NewProduct> {
        let code = self.code.trim();
        validate_code(code)?;

        let name = self.name.trim();
        validate_product_name(name)?;

        validate_description(&self.description)?;

        let expiration_date = parse_expiration_date(&self.expiration_date)?;
        let category = validate_category(&self.category)?;

        let image_path = self.image_path.trim();
        if policy.requires_image() && image_path.is_empty() {
            return Err(ValidationError::required("image"));
        }

        Ok(NewProduct {
            code: code.to_string(),
            name: name.to_string(),
            description: self.description.clone(),
            expiration_date,
            image_path: image_path.to_string(),
            category: category.as_str().to_string(),
        })
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, numbers, hyphens and underscores (it becomes part of the
///   image filename)
///
/// ## Example
/// ```rust
/// use cosmo_core::validation::validate_code;
///
/// assert!(validate_code("LIP-204").is_ok());
/// assert!(validate_code("").is_err());
/// assert!(validate_code("../etc").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::required("code"));
    }

    if code.chars().count() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product description: any non-blank text.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::required("description"));
    }
    Ok(())
}

/// Parses the category picker value into the closed category set.
pub fn validate_category(category: &str) -> ValidationResult<Category> {
    category.trim().parse()
}

/// Parses an expiration date in `YYYY-MM-DD` form.
///
/// ## Example
/// ```rust
/// use cosmo_core::validation::parse_expiration_date;
///
/// assert!(parse_expiration_date("2026-02-28").is_ok());
/// assert!(parse_expiration_date("2026-02-30").is_err());
/// assert!(parse_expiration_date("28/02/2026").is_err());
/// ```
pub fn parse_expiration_date(value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required("expiration_date"));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: "expiration_date".to_string(),
        reason: "expected a valid date as YYYY-MM-DD".to_string(),
    })
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
