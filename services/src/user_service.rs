use async_trait::async_trait;
use db::{
    Store,
    models::{
        account::Model as AccountModel, credential::Model as CredentialModel,
        user::Model as UserModel,
    },
};
use std::sync::Arc;

use crate::error::ServiceResult;

#[async_trait]
pub trait UserService: Send + Sync {
    /// The user acting on behalf of the credential's account.
    async fn get_user_from_credential(
        &self,
        credential: &CredentialModel,
    ) -> ServiceResult<Option<UserModel>>;

    async fn get_user_from_id(&self, id: &str) -> ServiceResult<Option<UserModel>>;
}

pub struct MemoryUserService {
    store: Arc<Store>,
}

impl MemoryUserService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub async fn create_user(
        &self,
        account: &AccountModel,
        display_id: &str,
        display_name: &str,
    ) -> UserModel {
        self.store
            .insert_user(UserModel::new(account.id.clone(), display_id, display_name))
            .await
    }
}

#[async_trait]
impl UserService for MemoryUserService {
    async fn get_user_from_credential(
        &self,
        credential: &CredentialModel,
    ) -> ServiceResult<Option<UserModel>> {
        Ok(self.store.find_user_by_account(&credential.account.id).await)
    }

    async fn get_user_from_id(&self, id: &str) -> ServiceResult<Option<UserModel>> {
        Ok(self.store.find_user(id).await)
    }
}
