//! # Product Repository
//!
//! Database operations for the products table.
//!
//! ## Key Operations
//! - Create (returns the assigned id, rejects duplicate codes)
//! - List all / list by category, in insertion order
//! - Lookup by id or code
//! - Full-overwrite update and hard delete by id
//!
//! Deleting a product never touches its image file; the copy under the
//! asset directory is left behind.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use cosmo_core::{NewProduct, Product};

const SELECT_PRODUCT: &str = r#"
    SELECT
        id,
        code,
        name,
        description,
        expiration_date,
        image_path,
        category
    FROM products
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.create(&new_product).await?;
/// let product = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(id)` - The store-assigned id
    /// * `Err(DbError::UniqueViolation)` - Code already exists; nothing written
    pub async fn create(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(code = %product.code, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (
                code, name, description, expiration_date, image_path, category
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6
            )
            "#,
        )
        .bind(&product.code)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.expiration_date)
        .bind(&product.image_path)
        .bind(&product.category)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_duplicate_value(&product.code))?;

        let id = result.last_insert_rowid();
        debug!(id, code = %product.code, "Product inserted");
        Ok(id)
    }

    /// Lists every product in insertion order.
    pub async fn get_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Loaded all products");
        Ok(products)
    }

    /// Lists the products whose category equals `category` exactly
    /// (case-sensitive), in insertion order.
    pub async fn get_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "{SELECT_PRODUCT} WHERE category = ?1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        debug!(category = %category, count = products.len(), "Loaded products by category");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Gets a product by its code.
    pub async fn get_by_code(&self, code: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE code = ?1"))
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Overwrites every field of the product identified by `id`.
    ///
    /// No uniqueness pre-check is made on `code`; if another record holds
    /// it, the table constraint rejects the statement.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No product with that id
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<()> {
        debug!(id, code = %product.code, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                code = ?2,
                name = ?3,
                description = ?4,
                expiration_date = ?5,
                image_path = ?6,
                category = ?7
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.code)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.expiration_date)
        .bind(&product.image_path)
        .bind(&product.category)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from(e).with_duplicate_value(&product.code))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Removes the product identified by `id`.
    ///
    /// ## Returns
    /// * `Ok(())` - Row deleted
    /// * `Err(DbError::NotFound)` - No product with that id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
