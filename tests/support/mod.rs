//! Shared fixtures: a mockito-backed server and an in-memory recording transport.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use mockito::{Server, ServerGuard};
use reqwest::header::{HeaderMap, HeaderValue};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use typecast::{HttpRequest, HttpResponse, Transport, TypecastClient};

pub const TEST_API_KEY: &str = "test-api-key-0001";

/// Test fixture that manages a mock server.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server, isolated from the process environment.
    pub fn client(&self) -> TypecastClient {
        TypecastClient::builder()
            .api_key(TEST_API_KEY)
            .host(&self.base_url)
            .env_source(HashMap::<String, String>::new())
            .build()
            .expect("client should build")
    }
}

/// Transport that never touches the network: counts calls, records requests
/// and answers with a canned response.
pub struct RecordingTransport {
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
    response: HttpResponse,
}

impl RecordingTransport {
    pub fn new(status: u16, headers: &[(&'static str, &'static str)], body: &'static [u8]) -> Arc<Self> {
        let mut map = HeaderMap::new();
        for &(name, value) in headers {
            map.insert(name, HeaderValue::from_static(value));
        }
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: HttpResponse {
                status,
                headers: map,
                body: Bytes::from_static(body),
            },
        })
    }

    pub fn audio() -> Arc<Self> {
        Self::new(
            200,
            &[("x-audio-duration", "1.0"), ("content-type", "audio/wav")],
            b"RIFF",
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> typecast::Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

pub fn client_with(transport: Arc<dyn Transport>) -> TypecastClient {
    TypecastClient::builder()
        .api_key(TEST_API_KEY)
        .env_source(HashMap::<String, String>::new())
        .transport(transport)
        .build()
        .expect("client should build")
}
