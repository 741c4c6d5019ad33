//! gloo-net implementation of `booking::Transport`.
//!
//! Client-side (csr): real `fetch` calls raced against a gloo timer.
//! Native builds (tests): a stub that fails every request, since there is no
//! browser to talk through.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use booking::request::ApiRequest;
use booking::{ApiError, ApiResponse, Transport};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "network unavailable outside the browser";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlooTransport {
    timeout: Duration,
}

impl GlooTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let call = Box::pin(fetch(request));
            let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_millis(self.timeout)));
            match select(call, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ApiError::Timeout),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, self.timeout);
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use booking::request::HttpMethod;
    use gloo_net::http::Request;

    let mut builder = match request.method {
        HttpMethod::Get => Request::get(&request.url),
        HttpMethod::Post => Request::post(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let outgoing = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(transport_error)?;
    let response = outgoing.send().await.map_err(transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    Ok(ApiResponse { status, body })
}

#[cfg(feature = "csr")]
fn transport_error(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

/// Timer length for `duration`, saturating at the browser's `u32` limit.
#[cfg(any(test, feature = "csr"))]
fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
