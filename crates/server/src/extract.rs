use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::ApiError;

/// JSON body extractor that runs the declarative `validator` rules after
/// deserialization, rejecting malformed input before it reaches the service.
pub struct ValidatedJson<T>(pub T);

#[async_trait::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;
        data.validate()
            .map_err(|e| ApiError::bad_request(flatten_errors(&e)))?;
        Ok(ValidatedJson(data))
    }
}

/// Path identifier extractor: must parse as an integer and be positive.
pub struct PathId(pub i32);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("ID deve ser um número válido"))?;
        if id <= 0 {
            return Err(ApiError::bad_request("ID deve ser positivo"));
        }
        Ok(PathId(id))
    }
}

fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let msgs: Vec<String> = errs
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            if msgs.is_empty() {
                format!("{} inválido", field)
            } else {
                msgs.join(", ")
            }
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
