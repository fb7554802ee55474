use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};

use crate::error::{AppError, AppResult};
use crate::models::user::APPROVED;
use crate::models::User;
use crate::repository::UserRepository;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    /// Upserts the user as a full record. A missing id gets a fresh UUID and
    /// a supplied password is stored as an argon2 hash.
    pub async fn save(&self, mut user: User) -> AppResult<User> {
        if user.id.is_none() {
            user.id = Some(uuid::Uuid::new_v4().to_string());
        }
        if let Some(password) = user.password.take() {
            user.password = Some(hash_password(&password)?);
        }
        self.repo.save(user).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        self.repo.delete_by_id(id).await
    }

    /// Users whose `admin` field is literally `"approved"`.
    pub async fn list_approved(&self) -> AppResult<Vec<User>> {
        let users = self.repo.find_by_admin(APPROVED).await?;
        tracing::info!("Retrieved {} approved users", users.len());
        Ok(users)
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use argon2::{PasswordHash, PasswordVerifier};

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryStore::new()))
    }

    fn user_with_admin(id: &str, admin: Option<&str>) -> User {
        User {
            id: Some(id.to_string()),
            name: Some(format!("user {}", id)),
            admin: admin.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_assigns_uuid_when_missing() {
        let service = service();
        let saved = service.save(User::default()).await.unwrap();
        let id = saved.id.expect("id assigned");
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert!(service.get_by_id(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_save_hashes_password() {
        let service = service();
        let user = User {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let saved = service.save(user).await.unwrap();
        let stored = saved.password.expect("password kept");

        assert_ne!(stored, "hunter2");
        let parsed = PasswordHash::new(&stored).unwrap();
        assert!(Argon2::default()
            .verify_password(b"hunter2", &parsed)
            .is_ok());
    }

    #[tokio::test]
    async fn test_list_approved_matches_literal_status() {
        let service = service();
        service.save(user_with_admin("a", Some("approved"))).await.unwrap();
        service.save(user_with_admin("b", Some("pending"))).await.unwrap();
        service.save(user_with_admin("c", Some("true"))).await.unwrap();
        service.save(user_with_admin("f", Some("Approved"))).await.unwrap();
        service.save(user_with_admin("d", None)).await.unwrap();
        service.save(user_with_admin("e", Some("approved"))).await.unwrap();

        let approved = service.list_approved().await.unwrap();
        let ids: Vec<_> = approved.iter().filter_map(|u| u.id.as_deref()).collect();
        assert_eq!(ids, vec!["a", "e"]);
    }

    #[tokio::test]
    async fn test_save_with_existing_id_replaces_record() {
        let service = service();
        let mut user = user_with_admin("a", Some("approved"));
        user.email = Some("a@example.com".to_string());
        service.save(user).await.unwrap();

        service.save(user_with_admin("a", None)).await.unwrap();

        let stored = service.get_by_id("a").await.unwrap().unwrap();
        assert_eq!(stored.email, None);
        assert_eq!(stored.admin, None);
    }
}
