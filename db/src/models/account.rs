use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authentication identity. A guest account is created for anonymous devices;
/// an account becomes activated once its email is verified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub is_guest: bool,
    pub activate_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Model {
    pub fn guest() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            is_guest: true,
            activate_date: None,
            created_at: Utc::now(),
        }
    }

    /// A registered account that has not verified its email yet.
    pub fn registered() -> Self {
        Self {
            is_guest: false,
            ..Self::guest()
        }
    }

    pub fn activated() -> Self {
        let now = Utc::now();
        Self {
            is_guest: false,
            activate_date: Some(now),
            ..Self::guest()
        }
    }

    pub fn is_activated(&self) -> bool {
        self.activate_date.is_some()
    }
}
