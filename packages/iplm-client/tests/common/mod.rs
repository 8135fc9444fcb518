//! Shared test utilities.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use iplm_client::graphql::{ResponseData, Transport, Variables};
use iplm_client::{ClientError, Result};
use serde_json::Value;

/// A document sent through the mock transport.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub document: String,
    pub variables: Variables,
}

/// Transport that replays scripted responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ResponseData>>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `data` object to be returned by the next call.
    pub fn respond(self, data: Value) -> Self {
        let data = match data {
            Value::Object(map) => map,
            other => panic!("mock response must be an object, got {}", other),
        };
        self.responses.lock().unwrap().push_back(Ok(data));
        self
    }

    /// Queue an error to be returned by the next call.
    pub fn fail(self, error: ClientError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, document: &str, variables: Variables) -> Result<ResponseData> {
        self.sent.lock().unwrap().push(SentRequest {
            document: document.to_string(),
            variables,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}
