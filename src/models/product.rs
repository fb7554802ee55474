use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Owning user; products are removed with their owner
    pub user_id: Option<String>,
}
