//! Request body parameters for the POST endpoints.
//!
//! The browser client posts `FormData` (multipart), HTML forms arrive
//! url-encoded and scripts tend to send JSON. All three decode into the same
//! DTO, and an empty body decodes to the DTO's default (every parameter
//! missing) so handlers can answer with the in-band message.

use std::future::Future;
use std::pin::Pin;

use actix_multipart::{Multipart, MultipartError};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::middleware::error::AppError;

/// Extractor for multipart, form or JSON body parameters.
#[derive(Debug)]
pub struct BodyParams<T>(pub T);

impl<T> BodyParams<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Buffered body formats. Multipart bodies are streamed field by field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Form,
}

impl BodyFormat {
    fn of(req: &HttpRequest) -> Self {
        if req.content_type().eq_ignore_ascii_case("application/json") {
            BodyFormat::Json
        } else {
            BodyFormat::Form
        }
    }
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.content_type().eq_ignore_ascii_case("multipart/form-data")
}

impl<T> FromRequest for BodyParams<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_multipart(req) {
            let multipart = Multipart::new(req.headers(), payload.take());
            return Box::pin(async move {
                let fields = multipart_fields(multipart).await?;
                from_fields(fields).map(BodyParams)
            });
        }

        let format = BodyFormat::of(req);
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let body = body
                .await
                .map_err(|e| AppError::BadRequest(format!("unreadable body: {e}")))?;
            decode(format, &body).map(BodyParams)
        })
    }
}

fn decode<T>(format: BodyFormat, body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match format {
        BodyFormat::Json => serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {e}"))),
        BodyFormat::Form => {
            let text = std::str::from_utf8(body)
                .map_err(|_| AppError::BadRequest("form body is not UTF-8".to_string()))?;
            web::Query::<T>::from_query(text)
                .map(web::Query::into_inner)
                .map_err(|e| AppError::BadRequest(format!("invalid form body: {e}")))
        }
    }
}

/// Collects the named text fields of a multipart body, in order.
async fn multipart_fields(mut multipart: Multipart) -> Result<Vec<(String, String)>, AppError> {
    let mut fields = Vec::new();

    while let Some(field) = multipart.next().await {
        let mut field = field.map_err(bad_multipart)?;
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(bad_multipart)?);
        }
        let value = String::from_utf8(bytes).map_err(|_| {
            AppError::BadRequest(format!("multipart field `{name}` is not UTF-8 text"))
        })?;
        fields.push((name, value));
    }

    Ok(fields)
}

/// Decodes text fields into the DTO. A repeated field keeps its first value.
fn from_fields<T>(fields: Vec<(String, String)>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let mut map = Map::new();
    for (name, value) in fields {
        map.entry(name).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(map))
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))
}

fn bad_multipart(err: MultipartError) -> AppError {
    AppError::BadRequest(format!("invalid multipart body: {err}"))
}
