use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{Item, Product, User};

use super::{ItemRepository, ProductRepository, UserRepository};

#[derive(Default)]
struct Tables {
    items: BTreeMap<i64, Item>,
    users: BTreeMap<String, User>,
    products: BTreeMap<i64, Product>,
    last_item_id: i64,
    last_product_id: i64,
}

/// In-process store backing all three repositories.
///
/// Ids are handed out monotonically and never reused, and deleting a user
/// removes that user's products, matching the Postgres schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Item>> {
        Ok(self.tables().items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        Ok(self.tables().items.get(&id).cloned())
    }

    async fn save(&self, mut item: Item) -> AppResult<Item> {
        let mut tables = self.tables();
        match item.id {
            None => {
                tables.last_item_id += 1;
                item.id = Some(tables.last_item_id);
            }
            Some(id) if !tables.items.contains_key(&id) => {
                return Err(AppError::NotFound(format!("Item not found for ID: {}", id)));
            }
            Some(_) => {}
        }
        if let Some(id) = item.id {
            tables.items.insert(id, item.clone());
        }
        Ok(item)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables().items.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.tables().users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.tables().users.get(id).cloned())
    }

    async fn find_by_admin(&self, admin: &str) -> AppResult<Vec<User>> {
        Ok(self
            .tables()
            .users
            .values()
            .filter(|u| u.admin.as_deref() == Some(admin))
            .cloned()
            .collect())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .clone()
            .ok_or_else(|| AppError::Internal("user id must be assigned before save".to_string()))?;
        self.tables().users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut tables = self.tables();
        let removed = tables.users.remove(id).is_some();
        if removed {
            tables
                .products
                .retain(|_, p| p.user_id.as_deref() != Some(id));
        }
        Ok(removed)
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.tables().products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.tables().products.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Vec<Product>> {
        Ok(self
            .tables()
            .products
            .values()
            .filter(|p| p.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn save(&self, mut product: Product) -> AppResult<Product> {
        let mut tables = self.tables();
        match product.id {
            None => {
                tables.last_product_id += 1;
                product.id = Some(tables.last_product_id);
            }
            Some(id) if !tables.products.contains_key(&id) => {
                return Err(AppError::NotFound(format!("Product not found for ID: {}", id)));
            }
            Some(_) => {}
        }
        if let Some(id) = product.id {
            tables.products.insert(id, product.clone());
        }
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables().products.remove(&id).is_some())
    }
}
