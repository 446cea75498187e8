use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use serde::{de, Deserialize, Deserializer};

use crate::errors::AppError;

/// `axum::Json` whose rejections render as `AppError::Validation` (400 with an
/// `{"error": ...}` body) instead of axum's plain-text 4xx responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(usize),
    Text(String),
}

impl NumberOrText {
    fn into_usize<E: de::Error>(self) -> Result<usize, E> {
        match self {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer '{text}'"))),
        }
    }
}

/// Non-negative integer given either as a JSON number or as a numeric string (`"3"`).
pub fn lenient_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?.into_usize()
}

/// Optional form of [`lenient_usize`]; `null` reads as `None`.
pub fn lenient_opt_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrText>::deserialize(deserializer)?
        .map(NumberOrText::into_usize)
        .transpose()
}
