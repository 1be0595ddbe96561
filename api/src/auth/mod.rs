pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::Claims;
pub use extractors::RequestMeta;

use chrono::{DateTime, Duration, Utc};
use db::models::account::Model as AccountModel;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use services::MemoryAuthenticationService;
use util::config;

/// Signs an access token for an account and returns it with its expiry.
pub fn generate_access_token(
    account_id: &str,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let expiry = Utc::now() + Duration::minutes(config::jwt_duration_minutes() as i64);
    let claims = Claims {
        sub: account_id.to_owned(),
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )?;

    Ok((token, expiry))
}

/// Verifies signature and expiry of an access token.
pub fn decode_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

/// Signs a token for the account and registers it as a credential.
pub async fn issue_access_token(
    auth: &MemoryAuthenticationService,
    account: &AccountModel,
) -> Result<String, jsonwebtoken::errors::Error> {
    let (token, expiry) = generate_access_token(&account.id)?;
    auth.issue_credential(account, token.clone(), expiry).await;
    Ok(token)
}
