//! # Cosmo Desktop Entry Point
//!
//! Starts the backend: logging, configuration, database, catalog overview.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cosmo Stock Desktop                              │
//! │                                                                         │
//! │  main.rs ────► tokio runtime, calls lib::run()                         │
//! │                                                                         │
//! │  lib.rs ─────► Logging, config, database, states                       │
//! │                                                                         │
//! │  commands/ ──► add_product, edit_product, load_products, ...           │
//! │                                                                         │
//! │  state/ ─────► DbState, AssetState, CatalogState, ConfigState          │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  stock.db (SQLite, WAL)  +  assets/products/{code}_{file}              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    cosmo_desktop_lib::run().await
}
