//! # Commands Module
//!
//! Everything the graphical layer can ask the backend to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Product list, search, add/edit/delete
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Graphical layer                                                        │
//! │  ───────────────                                                        │
//! │  cards = load_products(&db, &catalog, "Skincare").await?               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  async fn load_products(                                                │
//! │      db: &DbState,            ◄── Only the state it needs              │
//! │      catalog: &CatalogState,                                            │
//! │      category: &str,          ◄── From the category list               │
//! │  ) -> Result<Vec<ProductCardDto>, ApiError>                             │
//! │         │                                                               │
//! │         │ (camelCase JSON when serialized)                              │
//! │         ▼                                                               │
//! │  Cards rendered with their expiry highlight                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command awaits its store and file work before returning; nothing
//! runs in the background.

pub mod config;
pub mod product;
