use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// Longest message accepted for a `short` content, in characters.
pub const SHORT_MESSAGE_MAX_CHARS: usize = 280;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentType {
    Short,
    Blog,
    Image,
    Link,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ImageRef {
    #[validate(url)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct Photo {
    #[validate(nested)]
    pub cover: Option<ImageRef>,
    #[validate(nested)]
    #[serde(default)]
    pub contents: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: String,
    #[validate(url)]
    pub url: String,
}

/// The user-authored body of a content item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<Link>,
}

/// Request body for creating or updating a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveContentDto {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[validate(nested)]
    pub payload: ContentBody,
    #[validate(length(min = 1, message = "castcleId must not be empty"))]
    pub castcle_id: Option<String>,
}

fn shape_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

impl SaveContentDto {
    /// Field-level validation plus the per-type shape rules.
    pub fn validate_for_save(&self) -> Result<(), ValidationErrors> {
        self.validate()?;

        let body = &self.payload;
        let error = match self.content_type {
            ContentType::Short if is_blank(&body.message) => Some(shape_error(
                "message_required",
                "short content requires a message",
            )),
            ContentType::Short
                if body
                    .message
                    .as_deref()
                    .is_some_and(|m| m.chars().count() > SHORT_MESSAGE_MAX_CHARS) =>
            {
                Some(shape_error(
                    "message_too_long",
                    "short content message must be at most 280 characters",
                ))
            }
            ContentType::Blog if is_blank(&body.header) => Some(shape_error(
                "header_required",
                "blog content requires a header",
            )),
            ContentType::Image if body.photo.as_ref().is_none_or(|p| p.contents.is_empty()) => {
                Some(shape_error(
                    "photo_required",
                    "image content requires at least one photo",
                ))
            }
            ContentType::Link if body.link.is_empty() => Some(shape_error(
                "link_required",
                "link content requires at least one link",
            )),
            _ => None,
        };

        match error {
            Some(err) => {
                let mut errors = ValidationErrors::new();
                errors.add("payload", err);
                Err(errors)
            }
            None => Ok(()),
        }
    }
}

/// Author snapshot stored with the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub castcle_id: String,
    pub display_name: String,
    pub verified: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub content_type: ContentType,
    pub payload: ContentBody,
    pub author: Author,
    pub liked_by: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub slug: String,
    pub key: String,
    pub name: String,
}

impl Feature {
    pub fn feed() -> Self {
        Self {
            slug: "feed".into(),
            key: "feature.feed".into(),
            name: "Feed".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liked {
    pub count: usize,
}

/// Client-facing projection of a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub payload: ContentBody,
    pub feature: Feature,
    pub liked: Liked,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model {
    pub fn new(author: Author, dto: SaveContentDto) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            content_type: dto.content_type,
            payload: dto.payload,
            author,
            liked_by: BTreeSet::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Replaces the type and body; the author never changes.
    pub fn apply_update(&mut self, dto: SaveContentDto) {
        self.content_type = dto.content_type;
        self.payload = dto.payload;
        self.updated_at = Utc::now();
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn to_content_payload(&self) -> ContentPayload {
        ContentPayload {
            id: self.id.clone(),
            content_type: self.content_type,
            payload: self.payload.clone(),
            feature: Feature::feed(),
            liked: Liked {
                count: self.liked_by.len(),
            },
            author: self.author.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
