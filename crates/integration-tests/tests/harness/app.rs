//! Routes that raise every kind of error the catch layer distinguishes

use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use reqfault::{HandlerError, HttpError, RequestError, raise};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum InventoryError {
    #[error("item {0} is out of stock")]
    OutOfStock(u32),
}

impl HttpError for InventoryError {
    fn status_code(&self) -> axum::http::StatusCode {
        axum::http::StatusCode::CONFLICT
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct NewOrder {
    item: Option<u32>,
}

/// Raise whatever descriptor the path names
async fn status(Path(descriptor): Path<String>) -> Result<&'static str, HandlerError> {
    Err(RequestError::new(descriptor).into())
}

/// Raise the descriptor with a fixed JSON body
async fn status_with_body(Path(descriptor): Path<String>) -> Result<&'static str, HandlerError> {
    Err(RequestError::with_body(descriptor, json!({ "message": "x" })).into())
}

async fn item(Path(id): Path<u32>) -> Result<Json<Value>, HandlerError> {
    if id == 0 {
        return raise::not_found(None).map_err(Into::into);
    }

    Ok(Json(json!({ "id": id })))
}

async fn order(Json(order): Json<NewOrder>) -> Result<Json<Value>, HandlerError> {
    let Some(item) = order.item else {
        return raise::bad_request(json!({ "message": "item is required" })).map_err(Into::into);
    };

    if item == 13 {
        return Err(InventoryError::OutOfStock(item).to_request_error().into());
    }

    Ok(Json(json!({ "ordered": item })))
}

async fn crash() -> Result<&'static str, HandlerError> {
    let parsed: u32 = "not a number".parse().map_err(HandlerError::opaque)?;
    Ok(if parsed > 0 { "positive" } else { "zero" })
}

pub fn router() -> Router {
    Router::new()
        .route("/status/{descriptor}", get(status))
        .route("/status/{descriptor}/body", get(status_with_body))
        .route("/items/{id}", get(item))
        .route("/orders", post(order))
        .route("/crash", get(crash))
}
