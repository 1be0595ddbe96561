use async_trait::async_trait;
use db::{
    Store,
    models::{
        content::{Model as ContentModel, SaveContentDto},
        query::{ContentQueryOptions, Pagination},
        user::Model as UserModel,
    },
};
use std::sync::Arc;

use crate::error::{ServiceError, ServiceResult};

/// One page of a content listing.
#[derive(Debug, Clone)]
pub struct ContentPage {
    pub items: Vec<ContentModel>,
    pub pagination: Pagination,
}

#[async_trait]
pub trait ContentService: Send + Sync {
    async fn create_content_from_user(
        &self,
        user: &UserModel,
        dto: SaveContentDto,
    ) -> ServiceResult<ContentModel>;

    /// Live (not deleted) content by id.
    async fn get_content_from_id(&self, id: &str) -> ServiceResult<Option<ContentModel>>;

    async fn check_user_permission_for_edit_content(
        &self,
        user: &UserModel,
        content: &ContentModel,
    ) -> ServiceResult<bool>;

    async fn update_content_from_id(
        &self,
        id: &str,
        dto: SaveContentDto,
    ) -> ServiceResult<ContentModel>;

    /// Soft-deletes the content.
    async fn delete_content(&self, content: &ContentModel) -> ServiceResult<()>;

    async fn like_content(&self, content: &ContentModel, user: &UserModel) -> ServiceResult<()>;

    async fn unlike_content(&self, content: &ContentModel, user: &UserModel) -> ServiceResult<()>;

    async fn get_contents(&self, options: &ContentQueryOptions) -> ServiceResult<ContentPage>;
}

pub struct MemoryContentService {
    store: Arc<Store>,
}

impl MemoryContentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContentService for MemoryContentService {
    async fn create_content_from_user(
        &self,
        user: &UserModel,
        dto: SaveContentDto,
    ) -> ServiceResult<ContentModel> {
        // Pages are not modelled; a castcleId may only name the acting user.
        if let Some(castcle_id) = dto.castcle_id.as_deref() {
            if castcle_id != user.display_id {
                return Err(ServiceError::Forbidden(format!(
                    "user {} cannot post as {}",
                    user.id, castcle_id
                )));
            }
        }

        let content = self
            .store
            .insert_content(ContentModel::new(user.to_author(), dto))
            .await;
        tracing::info!(content_id = %content.id, author = %user.id, "content created");
        Ok(content)
    }

    async fn get_content_from_id(&self, id: &str) -> ServiceResult<Option<ContentModel>> {
        Ok(self.store.find_content(id).await)
    }

    async fn check_user_permission_for_edit_content(
        &self,
        user: &UserModel,
        content: &ContentModel,
    ) -> ServiceResult<bool> {
        Ok(content.author.id == user.id)
    }

    async fn update_content_from_id(
        &self,
        id: &str,
        dto: SaveContentDto,
    ) -> ServiceResult<ContentModel> {
        self.store
            .update_content(id, |content| content.apply_update(dto))
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("content {id}")))
    }

    async fn delete_content(&self, content: &ContentModel) -> ServiceResult<()> {
        if self.store.soft_delete_content(&content.id).await {
            tracing::info!(content_id = %content.id, "content deleted");
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("content {}", content.id)))
        }
    }

    async fn like_content(&self, content: &ContentModel, user: &UserModel) -> ServiceResult<()> {
        let user_id = user.id.clone();
        self.store
            .update_content(&content.id, |c| {
                c.liked_by.insert(user_id);
            })
            .await
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("content {}", content.id)))
    }

    async fn unlike_content(&self, content: &ContentModel, user: &UserModel) -> ServiceResult<()> {
        self.store
            .update_content(&content.id, |c| {
                c.liked_by.remove(&user.id);
            })
            .await
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(format!("content {}", content.id)))
    }

    async fn get_contents(&self, options: &ContentQueryOptions) -> ServiceResult<ContentPage> {
        let (items, has_more) = self.store.list_contents(options).await;
        Ok(ContentPage {
            items,
            pagination: Pagination::new(options, has_more),
        })
    }
}
