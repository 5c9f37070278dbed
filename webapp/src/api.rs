//! ==============================================================================
//! api.rs - fetch transport for the site endpoints
//! ==============================================================================

use gloo_net::http::{Request, RequestBuilder};
use log::debug;
use rede_shared::client::FORM_CONTENT_TYPE;
use rede_shared::{ApiRequest, ClientError, Method, Transport};

/// Sends requests with `fetch`; cookies ride along for same-origin calls.
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = request.endpoint.url(&self.base_url);
        match request.endpoint.method() {
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<(), ClientError> {
        let builder = self.builder(&request);

        let prepared = match request.body {
            Some(body) => builder
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!("{} answered {status}: {body}", request.endpoint.path());
        Err(ClientError::from_status(status, &body))
    }
}
