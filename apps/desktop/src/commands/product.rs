//! # Product Commands
//!
//! Commands behind the product list and the add/edit dialogs.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add / Edit Product                                   │
//! │                                                                         │
//! │  Dialog "Save" ──► ProductForm                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form.validate(Create | Edit) ── ValidationError ──► dialog stays open │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Code held by another product? ── yes ──► DUPLICATE_CODE               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stage image                                                           │
//! │  ├── add:  AssetStore::store          (image required)                 │
//! │  └── edit: AssetStore::stage_for_edit (empty keeps the stored image)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository::create / update ── UNIQUE(code) ──► DUPLICATE_CODE │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDto ──► caller reloads the list                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## List Flow
//! `load_products(category)` hits the store and caches the result;
//! `search_products(query)` only filters that cache. Both classify every
//! card against today's local date.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AssetState, CatalogState, DbState};
use cosmo_core::validation::validate_search_query;
use cosmo_core::{
    Category, CategoryFilter, ExpirationStatus, Product, ProductForm, ProductView,
    ValidationPolicy, ALL_CATEGORIES_LABEL,
};
use cosmo_db::Database;

/// Product DTO for the graphical layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub expiration_date: String,
    pub image_path: String,
    pub category: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        let expiration_date = p.expiration_label();
        ProductDto {
            id: p.id,
            code: p.code,
            name: p.name,
            description: p.description,
            expiration_date,
            image_path: p.image_path,
            category: p.category,
        }
    }
}

/// One card of the product list: the product plus its highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub status: ExpirationStatus,
}

impl From<ProductView> for ProductCardDto {
    fn from(view: ProductView) -> Self {
        ProductCardDto {
            product: ProductDto::from(view.product),
            status: view.status,
        }
    }
}

/// Today's date in local time; the reference for every expiry highlight.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Labels for the category list: `"All"` first, then every category.
pub fn get_categories() -> Vec<String> {
    std::iter::once(ALL_CATEGORIES_LABEL.to_string())
        .chain(Category::labels())
        .collect()
}

/// Creates a product from the add dialog.
///
/// ## Behavior
/// - Every field is required, including the image
/// - The image is copied into the asset directory before the insert; a
///   failed copy leaves the store untouched
/// - A code already in use is rejected before anything is copied, so the
///   other product's image is never overwritten
///
/// ## Returns
/// The created product, with its store-assigned id
pub async fn add_product(
    db: &DbState,
    assets: &AssetState,
    form: ProductForm,
) -> Result<ProductDto, ApiError> {
    debug!(code = %form.code, "add_product command");

    let mut new = form.validate(ValidationPolicy::Create)?;

    let db_inner: &Database = db.inner();
    if db_inner.products().get_by_code(&new.code).await?.is_some() {
        return Err(ApiError::duplicate_code(&new.code));
    }

    let staged = assets.inner().store(&new.code, &new.image_path).await?;
    new.image_path = staged.to_string_lossy().into_owned();

    let id = db_inner.products().create(&new).await?;

    info!(id, code = %new.code, "Product added");
    Ok(ProductDto::from(Product::from_new(id, new)))
}

/// Overwrites a product from the edit dialog.
///
/// ## Behavior
/// - Same checks as add, except the image is optional
/// - An empty image keeps the stored one; a path that already names a
///   managed copy is reused without copying; anything else is staged
/// - A code held by another product is rejected before anything is
///   staged, so that product's image is never overwritten
///
/// ## Arguments
/// * `id` - Id of the product being edited
/// * `form` - Dialog values, usually pre-filled with `ProductForm::from_product`
pub async fn edit_product(
    db: &DbState,
    assets: &AssetState,
    id: i64,
    form: ProductForm,
) -> Result<ProductDto, ApiError> {
    debug!(id, code = %form.code, "edit_product command");

    let mut changes = form.validate(ValidationPolicy::Edit)?;

    let db_inner: &Database = db.inner();
    let current = db_inner
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &id.to_string()))?;

    if let Some(holder) = db_inner.products().get_by_code(&changes.code).await? {
        if holder.id != id {
            return Err(ApiError::duplicate_code(&changes.code));
        }
    }

    if changes.image_path.is_empty() {
        changes.image_path = current.image_path;
    } else {
        let staged = assets
            .inner()
            .stage_for_edit(&changes.code, &changes.image_path)
            .await?;
        changes.image_path = staged.to_string_lossy().into_owned();
    }

    db_inner.products().update(id, &changes).await?;

    info!(id, code = %changes.code, "Product updated");
    Ok(ProductDto::from(Product::from_new(id, changes)))
}

/// Deletes a product. Its image file stays in the asset directory.
pub async fn delete_product(db: &DbState, id: i64) -> Result<(), ApiError> {
    debug!(id, "delete_product command");

    db.inner().products().delete(id).await?;

    info!(id, "Product deleted");
    Ok(())
}

/// Gets a single product by its id.
///
/// ## Returns
/// The product if found, or an error with code `NOT_FOUND`
pub async fn get_product(db: &DbState, id: i64) -> Result<ProductDto, ApiError> {
    debug!(id, "get_product command");
    let db_inner: &Database = db.inner();
    let product = db_inner
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &id.to_string()))?;
    Ok(ProductDto::from(product))
}

/// Loads the product list for a category pick.
///
/// ## Arguments
/// * `category` - `"All"` or one of the category labels
///
/// ## Returns
/// Every product in the category as classified cards, in insertion order.
/// The list is cached for `search_products`.
pub async fn load_products(
    db: &DbState,
    catalog: &CatalogState,
    category: &str,
) -> Result<Vec<ProductCardDto>, ApiError> {
    let start = Instant::now();
    let filter: CategoryFilter = category.trim().parse()?;

    debug!(filter = %filter, "load_products command");

    let repo = db.inner().products();
    let products = match filter.category() {
        None => repo.get_all().await?,
        Some(category) => repo.get_by_category(category.as_str()).await?,
    };

    let today = today();
    let cards: Vec<ProductCardDto> = catalog.with_catalog_mut(|c| {
        c.replace(filter, products);
        c.views("", today)
            .into_iter()
            .map(ProductCardDto::from)
            .collect()
    });

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = cards.len(),
        filter = %filter,
        "load_products complete"
    );

    Ok(cards)
}

/// Filters the loaded list by the search box text.
///
/// ## Arguments
/// * `query` - Case-insensitive substring of any displayed field; empty
///   shows the whole loaded list
pub fn search_products(
    catalog: &CatalogState,
    query: &str,
) -> Result<Vec<ProductCardDto>, ApiError> {
    let query = validate_search_query(query)?;
    debug!(query = %query, "search_products command");

    let today = today();
    let cards: Vec<ProductCardDto> = catalog.with_catalog(|c| {
        c.views(&query, today)
            .into_iter()
            .map(ProductCardDto::from)
            .collect()
    });

    debug!(count = cards.len(), query = %query, "search_products complete");
    Ok(cards)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Days;
    use cosmo_db::DbConfig;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct Harness {
        dir: TempDir,
        db: DbState,
        assets: AssetState,
        catalog: CatalogState,
    }

    impl Harness {
        async fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let db = Database::new(DbConfig::in_memory()).await.unwrap();
            let assets = AssetState::new(dir.path().join("assets"));
            Harness {
                dir,
                db: DbState::new(db),
                assets,
                catalog: CatalogState::new(),
            }
        }

        /// Writes a file the user could pick in the image dialog.
        fn picked(&self, name: &str, bytes: &[u8]) -> PathBuf {
            let path = self.dir.path().join(name);
            std::fs::write(&path, bytes).unwrap();
            path
        }

        fn asset_count(&self) -> usize {
            match std::fs::read_dir(self.assets.inner().root()) {
                Ok(entries) => entries.count(),
                Err(_) => 0,
            }
        }
    }

    fn date_in(days: i64) -> String {
        let today = Local::now().date_naive();
        let date = if days < 0 {
            today.checked_sub_days(Days::new(days.unsigned_abs()))
        } else {
            today.checked_add_days(Days::new(days as u64))
        };
        date.unwrap().format("%Y-%m-%d").to_string()
    }

    fn form(code: &str, category: &str, image: &Path) -> ProductForm {
        ProductForm {
            code: code.to_string(),
            name: format!("Product {}", code),
            description: "Sample cosmetic".to_string(),
            expiration_date: date_in(100),
            category: category.to_string(),
            image_path: image.to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn test_get_categories() {
        let labels = get_categories();

        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "All");
        assert!(labels.contains(&"Bath & Body".to_string()));
    }

    #[tokio::test]
    async fn test_add_product_stages_image() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png bytes");

        let dto = add_product(&h.db, &h.assets, form("ABC123", "Skincare", &photo))
            .await
            .unwrap();

        assert!(dto.image_path.ends_with("ABC123_photo.png"));
        assert_eq!(std::fs::read(&dto.image_path).unwrap(), b"png bytes");

        let stored = get_product(&h.db, dto.id).await.unwrap();
        assert_eq!(stored, dto);
    }

    #[tokio::test]
    async fn test_add_product_requires_image() {
        let h = Harness::new().await;
        let input = form("ABC123", "Skincare", Path::new(""));

        let err = add_product(&h.db, &h.assets, input).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(h.db.inner().products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_product_rejects_unknown_category() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");

        let err = add_product(&h.db, &h.assets, form("ABC123", "Jewelry", &photo))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(h.asset_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_copy_leaves_store_untouched() {
        let h = Harness::new().await;
        let missing = h.dir.path().join("not-there.png");

        let err = add_product(&h.db, &h.assets, form("ABC123", "Makeup", &missing))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AssetError);
        assert_eq!(h.db.inner().products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_code_keeps_existing_image() {
        let h = Harness::new().await;
        let first = h.picked("photo.png", b"original");
        let existing = add_product(&h.db, &h.assets, form("LIP-02", "Makeup", &first))
            .await
            .unwrap();

        // Same basename from another folder would land on the same asset name
        let clash_dir = h.dir.path().join("clash");
        std::fs::create_dir_all(&clash_dir).unwrap();
        let clash_photo = clash_dir.join("photo.png");
        std::fs::write(&clash_photo, b"impostor").unwrap();

        let err = add_product(&h.db, &h.assets, form("LIP-02", "Tools", &clash_photo))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateCode);
        assert_eq!(std::fs::read(&existing.image_path).unwrap(), b"original");
        assert_eq!(h.db.inner().products().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_edit_without_image_keeps_stored_one() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");
        let created = add_product(&h.db, &h.assets, form("ABC123", "Skincare", &photo))
            .await
            .unwrap();

        let mut input = form("ABC123", "Haircare", Path::new(""));
        input.name = "Renamed".to_string();

        let edited = edit_product(&h.db, &h.assets, created.id, input)
            .await
            .unwrap();

        assert_eq!(edited.image_path, created.image_path);
        assert_eq!(edited.name, "Renamed");
        assert_eq!(edited.category, "Haircare");
        assert_eq!(get_product(&h.db, created.id).await.unwrap(), edited);
    }

    #[tokio::test]
    async fn test_edit_with_managed_image_does_not_copy() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");
        let created = add_product(&h.db, &h.assets, form("ABC123", "Skincare", &photo))
            .await
            .unwrap();

        // Pre-filled dialog, code changed
        let stored = h.db.inner().products().get_by_id(created.id).await.unwrap().unwrap();
        let mut input = ProductForm::from_product(&stored);
        input.code = "XYZ789".to_string();

        let edited = edit_product(&h.db, &h.assets, created.id, input)
            .await
            .unwrap();

        assert_eq!(edited.code, "XYZ789");
        assert_eq!(edited.image_path, created.image_path);
        assert_eq!(h.asset_count(), 1);
    }

    #[tokio::test]
    async fn test_edit_with_new_pick_stages_it() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"old");
        let created = add_product(&h.db, &h.assets, form("ABC123", "Skincare", &photo))
            .await
            .unwrap();

        let fresh = h.picked("fresh.png", b"new");
        let edited = edit_product(&h.db, &h.assets, created.id, form("ABC123", "Skincare", &fresh))
            .await
            .unwrap();

        assert!(edited.image_path.ends_with("ABC123_fresh.png"));
        assert_eq!(std::fs::read(&edited.image_path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_edit_missing_product() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");

        let err = edit_product(&h.db, &h.assets, 404, form("ABC123", "Nails", &photo))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(h.asset_count(), 0);
    }

    #[tokio::test]
    async fn test_edit_to_taken_code() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");
        add_product(&h.db, &h.assets, form("A-1", "Nails", &photo))
            .await
            .unwrap();
        let b = add_product(&h.db, &h.assets, form("B-1", "Nails", &photo))
            .await
            .unwrap();

        let input = form("A-1", "Nails", Path::new(""));

        let err = edit_product(&h.db, &h.assets, b.id, input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateCode);
        assert_eq!(get_product(&h.db, b.id).await.unwrap().code, "B-1");
    }

    #[tokio::test]
    async fn test_edit_to_taken_code_keeps_other_image() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"original-A");
        let a = add_product(&h.db, &h.assets, form("A-1", "Nails", &photo))
            .await
            .unwrap();
        let other = h.picked("other.png", b"b");
        let b = add_product(&h.db, &h.assets, form("B-1", "Nails", &other))
            .await
            .unwrap();

        // Same basename as A's pick, from another folder
        let clash_dir = h.dir.path().join("clash");
        std::fs::create_dir_all(&clash_dir).unwrap();
        let clash_photo = clash_dir.join("photo.png");
        std::fs::write(&clash_photo, b"impostor").unwrap();

        let err = edit_product(&h.db, &h.assets, b.id, form("A-1", "Nails", &clash_photo))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateCode);
        assert_eq!(std::fs::read(&a.image_path).unwrap(), b"original-A");
        assert_eq!(get_product(&h.db, b.id).await.unwrap(), b);
        assert_eq!(h.asset_count(), 2);
    }

    #[tokio::test]
    async fn test_delete_product() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");
        let created = add_product(&h.db, &h.assets, form("DEL-1", "Tools", &photo))
            .await
            .unwrap();

        delete_product(&h.db, created.id).await.unwrap();

        let err = get_product(&h.db, created.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        // The image copy is left behind
        assert!(Path::new(&created.image_path).exists());

        let err = delete_product(&h.db, created.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_load_products_by_category() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");
        for (code, category) in [("S-1", "Skincare"), ("M-1", "Makeup"), ("S-2", "Skincare")] {
            add_product(&h.db, &h.assets, form(code, category, &photo))
                .await
                .unwrap();
        }

        let all = load_products(&h.db, &h.catalog, "All").await.unwrap();
        assert_eq!(all.len(), 3);

        let skincare = load_products(&h.db, &h.catalog, "Skincare").await.unwrap();
        let codes: Vec<&str> = skincare.iter().map(|c| c.product.code.as_str()).collect();
        assert_eq!(codes, vec!["S-1", "S-2"]);

        let err = load_products(&h.db, &h.catalog, "Jewelry").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        // Failed load keeps the previous list
        assert_eq!(h.catalog.with_catalog(|c| c.products.len()), 2);
    }

    #[tokio::test]
    async fn test_load_products_classifies_expiry() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");
        for (code, days) in [("OLD", -1), ("SOON", 0), ("EDGE", 30), ("LATER", 31)] {
            let mut input = form(code, "Skincare", &photo);
            input.expiration_date = date_in(days);
            add_product(&h.db, &h.assets, input).await.unwrap();
        }

        let statuses: Vec<ExpirationStatus> = load_products(&h.db, &h.catalog, "All")
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.status)
            .collect();

        assert_eq!(
            statuses,
            vec![
                ExpirationStatus::Expired,
                ExpirationStatus::ExpiringSoon,
                ExpirationStatus::ExpiringSoon,
                ExpirationStatus::Normal,
            ]
        );
    }

    #[tokio::test]
    async fn test_search_products_over_loaded_list() {
        let h = Harness::new().await;
        let photo = h.picked("photo.png", b"png");
        let mut serum = form("SRM-01", "Skincare", &photo);
        serum.name = "Hydrating Serum".to_string();
        add_product(&h.db, &h.assets, serum).await.unwrap();
        let mut lipstick = form("LIP-02", "Makeup", &photo);
        lipstick.name = "Matte Lipstick".to_string();
        add_product(&h.db, &h.assets, lipstick).await.unwrap();

        load_products(&h.db, &h.catalog, "All").await.unwrap();

        assert_eq!(search_products(&h.catalog, "").unwrap().len(), 2);
        assert_eq!(search_products(&h.catalog, "  ").unwrap().len(), 2);

        let hits = search_products(&h.catalog, "SKIN").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.code, "SRM-01");

        let hits = search_products(&h.catalog, "matte").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.code, "LIP-02");

        // Search never reaches outside the loaded category
        load_products(&h.db, &h.catalog, "Makeup").await.unwrap();
        assert!(search_products(&h.catalog, "serum").unwrap().is_empty());

        let err = search_products(&h.catalog, &"x".repeat(101)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_card_serialization() {
        let card = ProductCardDto {
            product: ProductDto {
                id: 7,
                code: "SRM-01".to_string(),
                name: "Hydrating Serum".to_string(),
                description: "Serum".to_string(),
                expiration_date: "2025-06-30".to_string(),
                image_path: "/assets/SRM-01_serum.png".to_string(),
                category: "Skincare".to_string(),
            },
            status: ExpirationStatus::ExpiringSoon,
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["expirationDate"], "2025-06-30");
        assert_eq!(json["imagePath"], "/assets/SRM-01_serum.png");
        assert_eq!(json["status"], "expiring_soon");
    }
}
