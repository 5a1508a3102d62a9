//! # Repository Module
//!
//! Database repository implementations for Cosmo Stock.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Desktop Command                                                       │
//! │       │                                                                 │
//! │       │  db.products().get_by_category("Skincare")                     │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, product)        → id                                │
//! │  ├── get_all / get_by_category                                         │
//! │  ├── get_by_id / get_by_code                                           │
//! │  ├── update(&self, id, product)                                        │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  One SQL statement per call                                     │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD

pub mod product;
