use serde::Serialize;
use stays_gen::GenError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum AppError {
    #[error("Unable to build the listing: {0}")]
    Listing(#[serde(serialize_with = "serialize_display")] GenError),
    #[error("Invalid page configuration: {0}")]
    Config(String),
}

impl From<GenError> for AppError {
    fn from(value: GenError) -> Self {
        Self::Listing(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}

fn serialize_display<S>(value: &GenError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

pub type AppResult<T> = Result<T, AppError>;
