use std::sync::Arc;

use crate::audit::AuditWriter;
use crate::error::{AppError, AppResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Item CRUD with a change log line and a JSON backup line per mutation.
///
/// Both appends happen after the store call and are best effort: a failed
/// append is logged and never surfaces to the caller. They are not atomic with
/// the store write.
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
    change_log: Arc<dyn AuditWriter>,
    backup: Arc<dyn AuditWriter>,
}

impl ItemService {
    pub fn new(
        repo: Arc<dyn ItemRepository>,
        change_log: Arc<dyn AuditWriter>,
        backup: Arc<dyn AuditWriter>,
    ) -> Self {
        Self {
            repo,
            change_log,
            backup,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Item>> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        self.repo.find_by_id(id).await
    }

    /// Creates the item when it has no id, otherwise replaces the stored
    /// record in full.
    pub async fn save(&self, item: Item) -> AppResult<Item> {
        let saved = self.repo.save(item).await?;
        self.log_change(&format!("Saved or updated Item: {}", saved))
            .await;
        self.backup_item(&saved).await;
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item not found for ID: {}", id)))?;

        self.log_change(&format!("Deleted Item: {}", item)).await;
        self.backup_item(&item).await;
        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn read_log(&self) -> AppResult<String> {
        Ok(self.change_log.read_all().await?)
    }

    pub async fn read_backup(&self) -> AppResult<String> {
        Ok(self.backup.read_all().await?)
    }

    async fn log_change(&self, message: &str) {
        tracing::info!("{}", message);
        if let Err(e) = self.change_log.append_line(message).await {
            tracing::error!("Error writing item change log: {}", e);
        }
    }

    async fn backup_item(&self, item: &Item) {
        let json = match serde_json::to_string(item) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Error serializing {} for backup: {}", item, e);
                return;
            }
        };
        match self.backup.append_line(&json).await {
            Ok(()) => tracing::debug!("Item {:?} backed up", item.id),
            Err(e) => tracing::error!("Error occurred while backing up {}: {}", item, e),
        }
    }
}
