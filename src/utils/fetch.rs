//! Browser HTTP transport with timeout support.
//!
//! [`GlooTransport`] sends requests through `gloo-net` and races each one
//! against a `gloo-timers` timeout.

use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;

use crate::core::api::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::core::error::FetchError;

/// `fetch`-backed transport.
#[derive(Clone, Copy, Debug)]
pub struct GlooTransport {
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl HttpTransport for GlooTransport {
    /// Send a request; fails with [`FetchError::Timeout`] if no response
    /// arrives within the configured time.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let exchange = pin!(exchange(request));
        let timeout = pin!(TimeoutFuture::new(self.timeout_ms));

        match select(exchange, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(FetchError::Timeout),
        }
    }
}

async fn exchange(request: HttpRequest) -> Result<HttpResponse, FetchError> {
    let mut builder: RequestBuilder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };
    builder = builder.header("Accept", "application/json");
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let built = match request.body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body),
        None => builder.build(),
    }
    .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = built
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    Ok(HttpResponse { status, body })
}
