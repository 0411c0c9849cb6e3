use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::Value;

/// Where the catch layer writes its response
///
/// Abstracts the host framework's response object so the resolution logic
/// stays framework neutral.
pub trait ResponseSink {
    fn set_status(&mut self, status: StatusCode);

    /// Write the body serialized as JSON
    fn send_json(&mut self, body: &Value);

    /// Write the body as plain text
    fn send_text(&mut self, body: &str);

    /// Signal that no further writes will occur
    fn end_stream(&mut self);
}

#[derive(Debug, Default)]
enum Payload {
    #[default]
    Empty,
    Json(Value),
    Text(String),
}

/// [`ResponseSink`] that assembles an axum [`Response`]
#[derive(Debug)]
pub struct AxumSink {
    status: StatusCode,
    payload: Payload,
    ended: bool,
}

impl Default for AxumSink {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            payload: Payload::Empty,
            ended: false,
        }
    }
}

impl AxumSink {
    /// Empty `200 OK` sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`ResponseSink::end_stream`] was called
    pub const fn is_ended(&self) -> bool {
        self.ended
    }
}

impl ResponseSink for AxumSink {
    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn send_json(&mut self, body: &Value) {
        self.payload = Payload::Json(body.clone());
    }

    fn send_text(&mut self, body: &str) {
        self.payload = Payload::Text(body.to_owned());
    }

    fn end_stream(&mut self) {
        self.ended = true;
    }
}

impl IntoResponse for AxumSink {
    fn into_response(self) -> Response {
        match self.payload {
            Payload::Empty => self.status.into_response(),
            Payload::Json(body) => (self.status, Json(body)).into_response(),
            Payload::Text(body) => (self.status, body).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;
    use http_body_util::BodyExt;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn json_payload_sets_content_type() {
        let mut sink = AxumSink::new();
        sink.set_status(StatusCode::NOT_FOUND);
        sink.send_json(&serde_json::json!({ "message": "x" }));

        let response = sink.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_text(response).await, r#"{"message":"x"}"#);
    }

    #[tokio::test]
    async fn text_payload_is_sent_raw() {
        let mut sink = AxumSink::new();
        sink.set_status(StatusCode::BAD_REQUEST);
        sink.send_text("bad input");

        let response = sink.into_response();
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(body_text(response).await, "bad input");
    }

    #[tokio::test]
    async fn empty_sink_is_a_bare_status() {
        let mut sink = AxumSink::new();
        assert!(!sink.is_ended());
        sink.end_stream();
        assert!(sink.is_ended());

        let response = sink.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "");
    }
}
