//! reqwest-backed transport
//!
//! Implements [`Transport`] with an async `reqwest` client driven on a
//! private current-thread tokio runtime. One request per call, no retries.

use serde_json::Value;

use crate::core::ports::{HttpReply, Transport, TransportError};

/// HTTP transport used by the `test` command
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl ReqwestTransport {
    /// Create a transport with its own runtime
    pub fn new() -> Result<Self, TransportError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TransportError::new(format!("failed to start runtime: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
        })
    }
}

impl Transport for ReqwestTransport {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Value,
    ) -> Result<HttpReply, TransportError> {
        self.runtime.block_on(async {
            let mut request = self.client.post(url).body(body.to_string());
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }

            let response = request.send().await.map_err(|e| TransportError::new(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;

            log::debug!("API test reply: status {status}, {} bytes", body.len());
            Ok(HttpReply { status, body })
        })
    }
}
