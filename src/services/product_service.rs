use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::Product;
use crate::repository::ProductRepository;

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        self.repo.find_by_id(id).await
    }

    pub async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<Product>> {
        self.repo.find_by_user_id(user_id).await
    }

    pub async fn create(&self, mut product: Product) -> AppResult<Product> {
        product.id = None;
        self.repo.save(product).await
    }

    /// Copies name and description onto the stored product; the owner is
    /// left as it was.
    pub async fn update(&self, id: i64, details: Product) -> AppResult<Product> {
        let mut product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product not found for ID: {}", id)))?;
        product.name = details.name;
        product.description = details.description;
        self.repo.save(product).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    fn product(name: &str, user_id: Option<&str>) -> Product {
        Product {
            name: Some(name.to_string()),
            description: Some(format!("{} description", name)),
            user_id: user_id.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_ignores_supplied_id() {
        let service = ProductService::new(Arc::new(MemoryStore::new()));
        let mut input = product("book", None);
        input.id = Some(77);
        let created = service.create(input).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn test_update_keeps_owner() {
        let service = ProductService::new(Arc::new(MemoryStore::new()));
        let created = service.create(product("book", Some("u1"))).await.unwrap();
        let id = created.id.unwrap();

        let updated = service.update(id, product("novel", None)).await.unwrap();

        assert_eq!(updated.name.as_deref(), Some("novel"));
        assert_eq!(updated.user_id.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = ProductService::new(Arc::new(MemoryStore::new()));
        let result = service.update(5, product("x", None)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_user_filters_owner() {
        let service = ProductService::new(Arc::new(MemoryStore::new()));
        service.create(product("a", Some("u1"))).await.unwrap();
        service.create(product("b", Some("u2"))).await.unwrap();
        service.create(product("c", Some("u1"))).await.unwrap();

        let owned = service.list_by_user("u1").await.unwrap();
        let names: Vec<_> = owned.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
