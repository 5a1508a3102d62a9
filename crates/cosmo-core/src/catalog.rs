//! # Catalog Queries
//!
//! Pure derivation of what the product list shows: which products are
//! visible for the current category and search box, and how each one is
//! highlighted.
//!
//! ## View Refresh
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Refresh                                 │
//! │                                                                         │
//! │  Loaded products (last store query)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_by_category ── "All" keeps everything, else exact match        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_text ───────── case-insensitive substring over displayed text  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  classify_expiration ─ Expired / ExpiringSoon / Normal vs. today        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductView> rendered as cards                                    │
//! │                                                                         │
//! │  Runs on every keystroke and category pick. Nothing is cached or       │
//! │  written back: the status depends on "today".                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Category, ExpirationStatus, Product};
use crate::{ALL_CATEGORIES_LABEL, EXPIRY_WARNING_DAYS};

// =============================================================================
// Category Filter
// =============================================================================

/// Selection in the category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only products whose category label equals this one exactly.
    Only(Category),
}

impl CategoryFilter {
    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == category.as_str(),
        }
    }

    /// The category to push down to a store query, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(*category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES_LABEL),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    /// Parses a category list label: `"All"` or one of the category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

/// Returns the products that pass the category filter, in input order.
pub fn filter_by_category(products: &[Product], filter: CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

// =============================================================================
// Text Search
// =============================================================================

/// The text a product card displays, one field per line.
///
/// Fields are joined with newlines so a search term (which never spans
/// lines) cannot match across two fields.
pub fn display_text(product: &Product) -> String {
    let expires = product.expiration_label();
    [
        product.name.as_str(),
        product.code.as_str(),
        product.category.as_str(),
        product.description.as_str(),
        expires.as_str(),
    ]
    .join("\n")
}

/// Case-insensitive substring match of `term` against the displayed text.
/// An empty term matches every product.
pub fn matches_text(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    display_text(product)
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Returns the products whose displayed text contains `term`, in input order.
pub fn search_text(products: &[Product], term: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_text(p, term))
        .cloned()
        .collect()
}

// =============================================================================
// Expiration
// =============================================================================

/// Classifies an expiration date relative to `today`.
///
/// ```text
///   ... ──── today-1 │ today ─────────── today+30 │ today+31 ────── ...
///        Expired     │      ExpiringSoon          │     Normal
/// ```
pub fn classify_expiration(expiration: NaiveDate, today: NaiveDate) -> ExpirationStatus {
    if expiration < today {
        return ExpirationStatus::Expired;
    }

    match today.checked_add_days(Days::new(EXPIRY_WARNING_DAYS)) {
        Some(limit) if expiration > limit => ExpirationStatus::Normal,
        // Past the end of the calendar every remaining date is inside the window
        _ => ExpirationStatus::ExpiringSoon,
    }
}

// =============================================================================
// Product View
// =============================================================================

/// A product together with its expiration status for one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub status: ExpirationStatus,
}

impl ProductView {
    /// Classifies `product` against `today`.
    pub fn new(product: Product, today: NaiveDate) -> Self {
        let status = classify_expiration(product.expiration_date, today);
        ProductView { product, status }
    }
}

/// Computes the visible product list: category filter, then text search,
/// then expiration classification.
pub fn visible_products(
    products: &[Product],
    filter: CategoryFilter,
    term: &str,
    today: NaiveDate,
) -> Vec<ProductView> {
    products
        .iter()
        .filter(|p| filter.matches(p) && matches_text(p, term))
        .map(|p| ProductView::new(p.clone(), today))
        .collect()
}

/// Per-status counts over a set of views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub total: usize,
    pub expired: usize,
    pub expiring_soon: usize,
    pub normal: usize,
}

impl StatusSummary {
    pub fn tally(views: &[ProductView]) -> Self {
        views.iter().fold(StatusSummary::default(), |mut acc, view| {
            acc.total += 1;
            match view.status {
                ExpirationStatus::Expired => acc.expired += 1,
                ExpirationStatus::ExpiringSoon => acc.expiring_soon += 1,
                ExpirationStatus::Normal => acc.normal += 1,
            }
            acc
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
