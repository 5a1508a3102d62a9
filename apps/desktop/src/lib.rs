//! # Cosmo Desktop Library
//!
//! Backend of the Cosmo Stock desktop application: startup plus the
//! command layer the graphical front end calls into.
//!
//! ## Module Organization
//! ```text
//! cosmo_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup & overview)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── assets.rs   ◄─── Image directory wrapper
//! │   ├── catalog.rs  ◄─── Loaded product list
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product list/search/CRUD commands
//! │   └── config.rs   ◄─── Configuration command
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! There is no single `AppState`; each concern has its own type:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Management                                     │
//! │                                                                         │
//! │  ┌────────────┐ ┌────────────┐ ┌────────────────┐ ┌────────────────┐   │
//! │  │  DbState   │ │ AssetState │ │  CatalogState  │ │  ConfigState   │   │
//! │  │            │ │            │ │                │ │                │   │
//! │  │ • Pool     │ │ • Image    │ │ • Last loaded  │ │ • DB path      │   │
//! │  │ • Repos    │ │   root     │ │   products     │ │ • Assets dir   │   │
//! │  │            │ │            │ │ • Category     │ │                │   │
//! │  └────────────┘ └────────────┘ └────────────────┘ └────────────────┘   │
//! │                                                                         │
//! │  Each command only takes the state it needs.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cosmo_core::StatusSummary;
use cosmo_db::{Database, DbConfig};
use error::ApiError;
use state::{CatalogState, ConfigState, DbState};

/// What the backend found at startup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupReport {
    pub config: ConfigState,
    pub categories: Vec<String>,
    pub summary: StatusSummary,
}

/// Runs the backend startup.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • Platform data directory, COSMO_DB_PATH / COSMO_ASSETS_DIR         │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Create the products table if missing                             │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState, CatalogState                                             │
/// │                                                                         │
/// │  5. Load "All" and log the catalog overview ──────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Cosmo Stock");

    let config = ConfigState::from_env()?;
    info!(
        db_path = %config.database_path.display(),
        assets_dir = %config.assets_dir.display(),
        "Configuration resolved"
    );

    if let Some(parent) = config.database_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::create_dir_all(&config.assets_dir).await?;

    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Database connected and schema ready");

    let db_state = DbState::new(db);
    let catalog = CatalogState::new();
    info!("State initialized");

    let report = catalog_overview(&db_state, &catalog, &config).await?;
    info!(
        total = report.summary.total,
        expired = report.summary.expired,
        expiring_soon = report.summary.expiring_soon,
        "Catalog loaded"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    db_state.inner().close().await;
    Ok(())
}

/// Loads every product into `catalog` and tallies the expiry statuses.
pub async fn catalog_overview(
    db: &DbState,
    catalog: &CatalogState,
    config: &ConfigState,
) -> Result<StartupReport, ApiError> {
    commands::product::load_products(db, catalog, cosmo_core::ALL_CATEGORIES_LABEL).await?;

    let today = chrono::Local::now().date_naive();
    let summary = catalog.with_catalog(|c| StatusSummary::tally(&c.views("", today)));

    Ok(StartupReport {
        config: commands::config::get_config(config),
        categories: commands::product::get_categories(),
        summary,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cosmo=trace` - Show trace for cosmo crates only
/// - Default: INFO, DEBUG for cosmo crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cosmo=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Local};
    use cosmo_core::NewProduct;

    #[tokio::test]
    async fn test_catalog_overview() {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        let catalog = CatalogState::new();
        let config = ConfigState::new("/data/cosmo");

        let today = Local::now().date_naive();
        let dates = [
            today.checked_sub_days(Days::new(3)).unwrap(),
            today.checked_add_days(Days::new(5)).unwrap(),
            today.checked_add_days(Days::new(200)).unwrap(),
        ];
        for (i, date) in dates.into_iter().enumerate() {
            db.inner()
                .products()
                .create(&NewProduct {
                    code: format!("P-{}", i),
                    name: "Sample".to_string(),
                    description: "Sample".to_string(),
                    expiration_date: date,
                    image_path: String::new(),
                    category: "Nails".to_string(),
                })
                .await
                .unwrap();
        }

        let report = catalog_overview(&db, &catalog, &config).await.unwrap();

        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.expired, 1);
        assert_eq!(report.summary.expiring_soon, 1);
        assert_eq!(report.summary.normal, 1);
        assert_eq!(report.categories[0], "All");
        assert_eq!(report.config, config);
    }
}
