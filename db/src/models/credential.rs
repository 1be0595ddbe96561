use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Model as AccountModel;

/// The account fields embedded in a credential at issue time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialAccount {
    pub id: String,
    pub is_guest: bool,
    pub activate_date: Option<DateTime<Utc>>,
}

impl From<&AccountModel> for CredentialAccount {
    fn from(account: &AccountModel) -> Self {
        Self {
            id: account.id.clone(),
            is_guest: account.is_guest,
            activate_date: account.activate_date,
        }
    }
}

/// Per-device credential resolved from a bearer access token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub access_token: String,
    pub access_token_expire_date: DateTime<Utc>,
    pub account: CredentialAccount,
}

impl Model {
    pub fn new(
        access_token: impl Into<String>,
        access_token_expire_date: DateTime<Utc>,
        account: &AccountModel,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            access_token_expire_date,
            account: account.into(),
        }
    }

    pub fn is_access_token_valid(&self) -> bool {
        self.access_token_expire_date > Utc::now()
    }

    /// Guests and accounts that never activated may not create or change content.
    pub fn can_mutate_content(&self) -> bool {
        !self.account.is_guest && self.account.activate_date.is_some()
    }
}
