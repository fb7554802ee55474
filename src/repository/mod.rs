// Identity-keyed data access for items, users and products

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::{PgItemRepository, PgProductRepository, PgUserRepository};

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Item, Product, User};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Item>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>>;

    /// Inserts when `item.id` is `None`, otherwise replaces the whole row.
    /// Replacing an id that does not exist fails with `NotFound`.
    async fn save(&self, item: Item) -> AppResult<Item>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Users whose `admin` column equals `admin` exactly.
    async fn find_by_admin(&self, admin: &str) -> AppResult<Vec<User>>;

    /// Upserts by id. The id must already be assigned.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Removes the user and, through the foreign key, their products.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<Product>>;

    /// Inserts when `product.id` is `None`, otherwise replaces the whole row.
    async fn save(&self, product: Product) -> AppResult<Product>;

    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}
