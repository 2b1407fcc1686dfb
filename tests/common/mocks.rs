//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior without real network I/O.

use ccverify::core::ports::{HttpReply, Transport, TransportError};
use serde_json::Value;
use std::cell::RefCell;

/// A request as seen by the mock transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

/// Mock implementation of Transport
pub struct MockTransport {
    reply: Result<HttpReply, TransportError>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpReply {
                status,
                body: body.to_string(),
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(TransportError::new(message)),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Value,
    ) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.to_vec(),
            body: body.clone(),
        });
        self.reply.clone()
    }
}
