//! In-memory persistence used by the reference collaborator services and the
//! test suites. Each collection sits behind its own `tokio::sync::RwLock`.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::{
    account::Model as AccountModel,
    content::Model as ContentModel,
    credential::Model as CredentialModel,
    query::{ContentQueryOptions, SortDirection, SortField},
    user::Model as UserModel,
};

#[derive(Default)]
pub struct Store {
    accounts: RwLock<HashMap<String, AccountModel>>,
    credentials: RwLock<HashMap<String, CredentialModel>>,
    users: RwLock<HashMap<String, UserModel>>,
    contents: RwLock<HashMap<String, ContentModel>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_account(&self, account: AccountModel) -> AccountModel {
        self.accounts
            .write()
            .await
            .insert(account.id.clone(), account.clone());
        account
    }

    pub async fn find_account(&self, id: &str) -> Option<AccountModel> {
        self.accounts.read().await.get(id).cloned()
    }

    pub async fn insert_credential(&self, credential: CredentialModel) -> CredentialModel {
        self.credentials
            .write()
            .await
            .insert(credential.access_token.clone(), credential.clone());
        credential
    }

    pub async fn find_credential(&self, access_token: &str) -> Option<CredentialModel> {
        self.credentials.read().await.get(access_token).cloned()
    }

    pub async fn insert_user(&self, user: UserModel) -> UserModel {
        self.users.write().await.insert(user.id.clone(), user.clone());
        user
    }

    pub async fn find_user(&self, id: &str) -> Option<UserModel> {
        self.users.read().await.get(id).cloned()
    }

    /// The oldest user owned by the account.
    pub async fn find_user_by_account(&self, account_id: &str) -> Option<UserModel> {
        self.users
            .read()
            .await
            .values()
            .filter(|u| u.owner_account == account_id)
            .min_by_key(|u| u.created_at)
            .cloned()
    }

    pub async fn insert_content(&self, content: ContentModel) -> ContentModel {
        self.contents
            .write()
            .await
            .insert(content.id.clone(), content.clone());
        content
    }

    /// Soft-deleted contents are not returned.
    pub async fn find_content(&self, id: &str) -> Option<ContentModel> {
        self.contents
            .read()
            .await
            .get(id)
            .filter(|c| !c.is_deleted())
            .cloned()
    }

    /// Applies `change` to a live content and returns the updated copy.
    pub async fn update_content<F>(&self, id: &str, change: F) -> Option<ContentModel>
    where
        F: FnOnce(&mut ContentModel),
    {
        let mut contents = self.contents.write().await;
        let content = contents.get_mut(id).filter(|c| !c.is_deleted())?;
        change(content);
        Some(content.clone())
    }

    pub async fn soft_delete_content(&self, id: &str) -> bool {
        self.update_content(id, |c| c.deleted_at = Some(Utc::now()))
            .await
            .is_some()
    }

    /// Returns one page of live contents and whether more pages follow.
    pub async fn list_contents(&self, options: &ContentQueryOptions) -> (Vec<ContentModel>, bool) {
        let contents = self.contents.read().await;
        let mut matching: Vec<&ContentModel> = contents
            .values()
            .filter(|c| !c.is_deleted())
            .filter(|c| options.content_type.is_none_or(|t| c.content_type == t))
            .collect();

        matching.sort_by(|a, b| {
            let ordering = match options.sort_by.field {
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            }
            .then_with(|| a.id.cmp(&b.id));
            match options.sort_by.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let skip = options.skip();
        let limit = options.limit as usize;
        let has_more = matching.len() > skip.saturating_add(limit);
        let page = matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect();
        (page, has_more)
    }
}
