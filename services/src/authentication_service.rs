use async_trait::async_trait;
use chrono::{DateTime, Utc};
use db::{
    Store,
    models::{account::Model as AccountModel, credential::Model as CredentialModel},
};
use std::sync::Arc;

use crate::error::ServiceResult;

#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Resolves the credential issued for `access_token`, if any.
    async fn get_credential_from_access_token(
        &self,
        access_token: &str,
    ) -> ServiceResult<Option<CredentialModel>>;

    /// Loads the current account behind a credential.
    async fn get_account_from_credential(
        &self,
        credential: &CredentialModel,
    ) -> ServiceResult<Option<AccountModel>>;
}

pub struct MemoryAuthenticationService {
    store: Arc<Store>,
}

impl MemoryAuthenticationService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn create_account(&self, account: AccountModel) -> AccountModel {
        self.store.insert_account(account).await
    }

    /// Registers an access token for the account. The caller signs the token.
    pub async fn issue_credential(
        &self,
        account: &AccountModel,
        access_token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> CredentialModel {
        let credential = CredentialModel::new(access_token, expires_at, account);
        tracing::debug!(account_id = %account.id, "issued credential");
        self.store.insert_credential(credential).await
    }
}

#[async_trait]
impl AuthenticationService for MemoryAuthenticationService {
    async fn get_credential_from_access_token(
        &self,
        access_token: &str,
    ) -> ServiceResult<Option<CredentialModel>> {
        Ok(self.store.find_credential(access_token).await)
    }

    async fn get_account_from_credential(
        &self,
        credential: &CredentialModel,
    ) -> ServiceResult<Option<AccountModel>> {
        Ok(self.store.find_account(&credential.account.id).await)
    }
}
