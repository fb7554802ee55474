use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemModel, Product, User};

use super::{ItemRepository, ProductRepository, UserRepository};

const ITEM_COLUMNS: &str = "id, name, description, tags";

const USER_COLUMNS: &str = "id, name, password, email, department, grade, admin, \
     student_id_image_url, rejection_reason, rates";

const PRODUCT_COLUMNS: &str = "id, name, description, user_id";

pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn find_all(&self) -> AppResult<Vec<Item>> {
        let models: Vec<ItemModel> =
            sqlx::query_as(&format!("SELECT {} FROM items ORDER BY id", ITEM_COLUMNS))
                .fetch_all(&self.pool)
                .await?;
        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        let model: Option<ItemModel> =
            sqlx::query_as(&format!("SELECT {} FROM items WHERE id = $1", ITEM_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(model.map(Item::from))
    }

    async fn save(&self, item: Item) -> AppResult<Item> {
        let Item {
            id,
            name,
            description,
            tags,
        } = item;
        let tags: Vec<String> = tags.into_iter().collect();

        let model: ItemModel = match id {
            None => {
                sqlx::query_as(&format!(
                    "INSERT INTO items (name, description, tags) VALUES ($1, $2, $3) \
                     RETURNING {}",
                    ITEM_COLUMNS
                ))
                .bind(&name)
                .bind(&description)
                .bind(&tags)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as(&format!(
                "UPDATE items SET name = $1, description = $2, tags = $3 WHERE id = $4 \
                 RETURNING {}",
                ITEM_COLUMNS
            ))
            .bind(&name)
            .bind(&description)
            .bind(&tags)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item not found for ID: {}", id)))?,
        };

        Ok(Item::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_admin(&self, admin: &str) -> AppResult<Vec<User>> {
        let users = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE admin = $1 ORDER BY id",
            USER_COLUMNS
        ))
        .bind(admin)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .as_deref()
            .ok_or_else(|| AppError::Internal("user id must be assigned before save".to_string()))?;

        let saved = sqlx::query_as(&format!(
            "INSERT INTO users ({cols}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, password = EXCLUDED.password, \
             email = EXCLUDED.email, department = EXCLUDED.department, grade = EXCLUDED.grade, \
             admin = EXCLUDED.admin, student_id_image_url = EXCLUDED.student_id_image_url, \
             rejection_reason = EXCLUDED.rejection_reason, rates = EXCLUDED.rates \
             RETURNING {cols}",
            cols = USER_COLUMNS
        ))
        .bind(id)
        .bind(&user.name)
        .bind(&user.password)
        .bind(&user.email)
        .bind(&user.department)
        .bind(&user.grade)
        .bind(&user.admin)
        .bind(&user.student_id_image_url)
        .bind(&user.rejection_reason)
        .bind(user.rates)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let products =
            sqlx::query_as(&format!("SELECT {} FROM products ORDER BY id", PRODUCT_COLUMNS))
                .fetch_all(&self.pool)
                .await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let product =
            sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(product)
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as(&format!(
            "SELECT {} FROM products WHERE user_id = $1 ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn save(&self, product: Product) -> AppResult<Product> {
        match product.id {
            None => {
                let saved = sqlx::query_as(&format!(
                    "INSERT INTO products (name, description, user_id) VALUES ($1, $2, $3) \
                     RETURNING {}",
                    PRODUCT_COLUMNS
                ))
                .bind(&product.name)
                .bind(&product.description)
                .bind(&product.user_id)
                .fetch_one(&self.pool)
                .await?;
                Ok(saved)
            }
            Some(id) => sqlx::query_as(&format!(
                "UPDATE products SET name = $1, description = $2, user_id = $3 WHERE id = $4 \
                 RETURNING {}",
                PRODUCT_COLUMNS
            ))
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.user_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product not found for ID: {}", id))),
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let rows_affected = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}
