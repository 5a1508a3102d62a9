//! # State Module
//!
//! Application state handed to the commands.
//!
//! Each concern gets its own state type, and each command takes only the
//! states it uses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │   DbState    │ │  AssetState  │ │ CatalogState │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Database    │ │  AssetStore  │ │  Arc<Mutex<  │ │  db path     │   │
//! │  │  (SQLite     │ │  (managed    │ │   Loaded     │ │  assets dir  │   │
//! │  │   pool)      │ │   images)    │ │   Catalog>>  │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • AssetState: immutable root path                                     │
//! │  • CatalogState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod assets;
mod catalog;
mod config;
mod db;

pub use assets::AssetState;
pub use catalog::{CatalogState, LoadedCatalog};
pub use config::{ConfigError, ConfigState};
pub use db::DbState;
