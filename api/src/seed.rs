//! Demo data for local development, enabled with `SEED_DEMO_DATA=true`.

use db::models::{
    account::Model as AccountModel,
    content::{ContentBody, ContentType, SaveContentDto},
};
use services::ContentService;

use crate::auth::issue_access_token;
use crate::state::MemoryServices;

/// What the seeder created, for printing or for tests to act as.
#[derive(Debug, Clone)]
pub struct SeededDemo {
    pub member_token: String,
    pub member_user_id: String,
    pub guest_token: String,
    pub content_id: String,
}

/// Seeds an activated member with a user and one short content, plus a guest.
pub async fn seed_demo_data(
    services: &MemoryServices,
) -> Result<SeededDemo, Box<dyn std::error::Error + Send + Sync>> {
    let member = services.auth.create_account(AccountModel::activated()).await;
    let user = services
        .users
        .create_user(&member, "castcle", "Castcle")
        .await;
    let member_token = issue_access_token(&services.auth, &member).await?;

    let guest = services.auth.create_account(AccountModel::guest()).await;
    let guest_token = issue_access_token(&services.auth, &guest).await?;

    let content = services
        .contents
        .create_content_from_user(
            &user,
            SaveContentDto {
                content_type: ContentType::Short,
                payload: ContentBody {
                    message: Some("Hello from the demo feed".into()),
                    ..Default::default()
                },
                castcle_id: None,
            },
        )
        .await?;

    tracing::info!(
        user_id = %user.id,
        content_id = %content.id,
        %member_token,
        %guest_token,
        "seeded demo data"
    );

    Ok(SeededDemo {
        member_token,
        member_user_id: user.id,
        guest_token,
        content_id: content.id,
    })
}
