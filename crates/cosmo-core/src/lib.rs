//! # cosmo-core: Pure Catalog Logic for Cosmo Stock
//!
//! This crate holds the rules of the cosmetic product catalog as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cosmo Stock Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Graphical layer (external)                   │   │
//! │  │    Category list ──► Search box ──► Product cards ──► Dialogs  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                cosmo-desktop commands                           │   │
//! │  │    add_product, edit_product, load_products, search_products    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cosmo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐     ┌───────────────┐     ┌───────────────┐    │   │
//! │  │   │   types   │     │    catalog    │     │  validation   │    │   │
//! │  │   │  Product  │     │ filter/search │     │ create / edit │    │   │
//! │  │   │ Category  │     │ expiry status │     │   policies    │    │   │
//! │  │   └───────────┘     └───────────────┘     └───────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cosmo-db (Database Layer)                    │   │
//! │  │            SQLite products table, managed image assets          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, ExpirationStatus)
//! - [`catalog`] - Category filter, text search, expiration classification
//! - [`error`] - Validation error types
//! - [`validation`] - Form validation with per-operation policies
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use cosmo_core::catalog::classify_expiration;
//! use cosmo_core::ExpirationStatus;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let expires = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//!
//! assert_eq!(classify_expiration(expires, today), ExpirationStatus::ExpiringSoon);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CategoryFilter, ProductView, StatusSummary};
pub use error::ValidationError;
pub use types::*;
pub use validation::{ProductForm, ValidationPolicy};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of days ahead of "today" that still counts as expiring soon.
///
/// The window is inclusive on both ends: a product expiring exactly
/// `today + EXPIRY_WARNING_DAYS` is still flagged.
pub const EXPIRY_WARNING_DAYS: u64 = 30;

/// Canonical text form of an expiration date, as stored and displayed.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Label of the category picker entry that disables category filtering.
pub const ALL_CATEGORIES_LABEL: &str = "All";
