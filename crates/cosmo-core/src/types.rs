//! # Domain Types
//!
//! Core domain types used throughout Cosmo Stock.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │ExpirationStatus │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  Skincare       │   │  Expired        │       │
//! │  │  code (unique)  │   │  Makeup         │   │  ExpiringSoon   │       │
//! │  │  name           │   │  Haircare       │   │  Normal         │       │
//! │  │  description    │   │  Fragrance      │   └─────────────────┘       │
//! │  │  expiration     │   │  Nails          │                             │
//! │  │  image_path     │   │  Tools          │   (derived, never stored)   │
//! │  │  category       │   │  Bath & Body    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! - `id`: assigned by the store, immutable, used by edit/delete
//! - `code`: human-facing, unique, part of the image asset filename

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Category
// =============================================================================

/// The closed set of product categories offered by the input form.
///
/// The store keeps categories as plain text and accepts anything; this enum
/// is what the form and the category filter agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Skincare,
    Makeup,
    Haircare,
    Fragrance,
    Nails,
    Tools,
    #[serde(rename = "Bath & Body")]
    BathAndBody,
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 7] = [
        Category::Skincare,
        Category::Makeup,
        Category::Haircare,
        Category::Fragrance,
        Category::Nails,
        Category::Tools,
        Category::BathAndBody,
    ];

    /// The label stored in the database and shown to the user.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Skincare => "Skincare",
            Category::Makeup => "Makeup",
            Category::Haircare => "Haircare",
            Category::Fragrance => "Fragrance",
            Category::Nails => "Nails",
            Category::Tools => "Tools",
            Category::BathAndBody => "Bath & Body",
        }
    }

    /// Labels of all categories, for error messages and pickers.
    pub fn labels() -> Vec<String> {
        Category::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses an exact (case-sensitive) category label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::labels(),
            })
    }
}

// =============================================================================
// Expiration Status
// =============================================================================

/// How close a product is to its expiration date.
///
/// Always computed from `(expiration_date, today)` at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationStatus {
    /// Expiration date is before today.
    Expired,
    /// Expires today or within the warning window.
    ExpiringSoon,
    /// Expires after the warning window.
    Normal,
}

// =============================================================================
// Product
// =============================================================================

/// A product record as persisted in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Unique business code (e.g. "LIP-204").
    pub code: String,

    /// Display name.
    pub name: String,

    /// Free-text description shown on the product card.
    pub description: String,

    /// Expiration date, stored as `YYYY-MM-DD`.
    #[ts(as = "String")]
    pub expiration_date: NaiveDate,

    /// Path of the staged image copy. May be empty for records edited
    /// without an image.
    pub image_path: String,

    /// Category label. Usually one of [`Category`], but the store accepts
    /// any string.
    pub category: String,
}

impl Product {
    /// Combines a store-assigned id with the submitted fields.
    pub fn from_new(id: i64, new: NewProduct) -> Self {
        Product {
            id,
            code: new.code,
            name: new.name,
            description: new.description,
            expiration_date: new.expiration_date,
            image_path: new.image_path,
            category: new.category,
        }
    }

    /// Every field except `id`.
    pub fn to_new(&self) -> NewProduct {
        NewProduct {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            expiration_date: self.expiration_date,
            image_path: self.image_path.clone(),
            category: self.category.clone(),
        }
    }

    /// Parses the stored category label, if it is one of the known ones.
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    /// Expiration date in its displayed form.
    pub fn expiration_label(&self) -> String {
        self.expiration_date.format(crate::DATE_FORMAT).to_string()
    }
}

/// The writable fields of a product, used for create and full-overwrite
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub description: String,
    #[ts(as = "String")]
    pub expiration_date: NaiveDate,
    pub image_path: String,
    pub category: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewProduct {
        NewProduct {
            code: "SRM-01".to_string(),
            name: "Hydrating Serum".to_string(),
            description: "Hyaluronic acid serum".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            image_path: "/assets/SRM-01_serum.png".to_string(),
            category: "Skincare".to_string(),
        }
    }

    #[test]
    fn test_category_round_trips_through_label() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(Category::BathAndBody.to_string(), "Bath & Body");
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!("skincare".parse::<Category>().is_err());
        assert!("All".parse::<Category>().is_err());

        let err = "Perfume".parse::<Category>().unwrap_err();
        assert_eq!(err.field(), "category");
    }

    #[test]
    fn test_category_serde_uses_labels() {
        let json = serde_json::to_string(&Category::BathAndBody).unwrap();
        assert_eq!(json, "\"Bath & Body\"");
    }

    #[test]
    fn test_from_new_and_back() {
        let new = sample();
        let product = Product::from_new(7, new.clone());

        assert_eq!(product.id, 7);
        assert_eq!(product.to_new(), new);
        assert_eq!(product.category_kind(), Some(Category::Skincare));
        assert_eq!(product.expiration_label(), "2025-06-30");
    }

    #[test]
    fn test_unknown_category_kind() {
        let mut new = sample();
        new.category = "Jewelry".to_string();
        let product = Product::from_new(1, new);
        assert_eq!(product.category_kind(), None);
    }
}
