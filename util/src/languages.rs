use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Languages a client may request through `Accept-Language`.
/// Serialized/deserialized in `lowercase`; regional variants are accepted
/// (e.g., "en-US", "th-TH").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en-us", alias = "en-gb")]
    En,
    #[serde(alias = "th-th")]
    Th,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }

    /// Picks the first supported language out of an `Accept-Language` value.
    ///
    /// Quality weights are ignored; the client's order wins.
    pub fn from_accept_language(raw: &str) -> Option<Language> {
        raw.split(',')
            .map(|part| part.split(';').next().unwrap_or_default().trim())
            .find_map(|tag| tag.parse().ok())
    }

    /// Localized message for an error key. Unknown keys yield a generic message.
    pub fn message(self, key: &str) -> &'static str {
        match (self, key) {
            (Language::En, "REQUEST_URL_NOT_FOUND") => "Request URL not found",
            (Language::Th, "REQUEST_URL_NOT_FOUND") => "ไม่พบ URL ที่ร้องขอ",

            (Language::En, "MISSING_AUTHORIZATION_HEADERS") => "Missing authorization header",
            (Language::Th, "MISSING_AUTHORIZATION_HEADERS") => "ไม่พบ authorization header",

            (Language::En, "MISSING_REQUIRED_HEADERS") => "Missing required headers",
            (Language::Th, "MISSING_REQUIRED_HEADERS") => "ไม่พบ header ที่จำเป็น",

            (Language::En, "INVALID_ACCESS_TOKEN") => "Invalid access token",
            (Language::Th, "INVALID_ACCESS_TOKEN") => "access token ไม่ถูกต้อง",

            (Language::En, "INVALID_FORMAT") => "Invalid format",
            (Language::Th, "INVALID_FORMAT") => "รูปแบบข้อมูลไม่ถูกต้อง",

            (Language::En, "FORBIDDEN_REQUEST") => "Can not access the data",
            (Language::Th, "FORBIDDEN_REQUEST") => "ไม่สามารถเข้าถึงข้อมูลได้",

            (Language::Th, _) => "เกิดข้อผิดพลาดภายในระบบ",
            (Language::En, _) => "Internal server error",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "th" => Ok(Language::Th),
            _ => Err(()),
        }
    }
}
