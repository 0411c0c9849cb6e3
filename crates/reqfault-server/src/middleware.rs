use axum::Router;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::catcher::{Catcher, Outcome};
use crate::fault::CaughtError;
use crate::sink::AxumSink;

/// Catch layer middleware
///
/// Runs the inner service and, when the response carries a [`CaughtError`],
/// lets the catcher decide the final response. Delegated errors keep the
/// inner response and stay attached for catch layers further out, as do
/// errors whose response was written without ending the request.
pub async fn catch_middleware(catcher: Catcher, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(caught) = response.extensions_mut().remove::<CaughtError>() else {
        return response;
    };

    let mut sink = AxumSink::new();
    let outcome = catcher.handle(caught.error(), &mut sink, |_| {
        tracing::debug!("unrecognized error, forwarding to the next handler");
    });

    match outcome {
        Outcome::Delegated => {
            response.extensions_mut().insert(caught);
            response
        }
        Outcome::Responded => {
            let ended = sink.is_ended();
            let mut response = sink.into_response();
            if !ended {
                response.extensions_mut().insert(caught);
            }
            response
        }
    }
}

impl Catcher {
    /// Wrap every route of `router` with this catcher
    pub fn apply<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(axum::middleware::from_fn(move |req, next| {
            let catcher = self.clone();
            async move { catch_middleware(catcher, req, next).await }
        }))
    }
}
