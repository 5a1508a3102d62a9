//! # cosmo-db: Storage Layer for Cosmo Stock
//!
//! This crate provides persistence for the Cosmo Stock catalog: the SQLite
//! products table (through sqlx) and the managed directory that holds
//! copies of product images.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cosmo Stock Data Flow                            │
//! │                                                                         │
//! │  Desktop command (add_product)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     cosmo-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  AssetStore  │  │   │
//! │  │   │   (pool.rs)   │    │ (product.rs)  │    │ (assets.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ {code}_{img} │  │   │
//! │  │   │ Migrations    │    │ CRUD by id    │    │ copies       │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                             │                   │
//! │       ▼                                             ▼                   │
//! │   stock.db (SQLite)                       assets/products/ directory    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema
//! - [`error`] - Database error types
//! - [`repository`] - Product repository
//! - [`assets`] - Managed image copies
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cosmo_db::{AssetStore, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/stock.db")).await?;
//! let assets = AssetStore::new("path/to/assets/products");
//!
//! let image = assets.store("LIP-204", "/home/me/lipstick.png").await?;
//! let id = db.products().create(&new_product).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod assets;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use assets::{AssetError, AssetStore};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
