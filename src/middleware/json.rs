use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Raw JSON request body.
///
/// Bodies sent without a JSON content type are read as an empty object, so
/// they fail validation with field messages. Malformed JSON is a 400 with an
/// `error` message, and every other rejection (an oversized body is 413)
/// keeps its status but speaks the same `{error}` shape.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                Ok(JsonBody(Value::Object(Map::new())))
            }
            Err(JsonRejection::JsonSyntaxError(e)) => {
                Err(ApiError::invalid_json(format!("Malformed JSON body: {}", e.body_text()))
                    .into_response())
            }
            Err(JsonRejection::JsonDataError(e)) => {
                Err(ApiError::invalid_json(format!("Invalid JSON body: {}", e.body_text()))
                    .into_response())
            }
            Err(other) => {
                Err(ApiError::rejected(other.status(), other.body_text()).into_response())
            }
        }
    }
}
