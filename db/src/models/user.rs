use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::Author;

/// Profile owned by exactly one account; the author/editor identity for content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub owner_account: String,
    pub display_id: String,
    pub display_name: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Model {
    pub fn new(
        owner_account: impl Into<String>,
        display_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            owner_account: owner_account.into(),
            display_id: display_id.into(),
            display_name: display_name.into(),
            verified: false,
            created_at: Utc::now(),
        }
    }

    pub fn to_author(&self) -> Author {
        Author {
            id: self.id.clone(),
            kind: "people".into(),
            castcle_id: self.display_id.clone(),
            display_name: self.display_name.clone(),
            verified: self.verified,
        }
    }
}
