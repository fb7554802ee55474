use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Row shape of the `items` table.
#[derive(Debug, Clone, FromRow)]
pub struct ItemModel {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Item as exchanged over the API and written to the backup file.
///
/// `id` is `None` until the store assigns one. Saving with an `id` replaces
/// the whole record: a missing `description` or `tags` is written as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: BTreeSet<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            description: Some(description.into()),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl From<ItemModel> for Item {
    fn from(model: ItemModel) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            tags: model.tags.into_iter().collect(),
        }
    }
}

fn quoted(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("'{}'", v),
        None => "null".to_string(),
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "null".to_string());
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        write!(
            f,
            "Item{{id={}, name={}, description={}, tags=[{}]}}",
            id,
            quoted(&self.name),
            quoted(&self.description),
            tags.join(", ")
        )
    }
}
