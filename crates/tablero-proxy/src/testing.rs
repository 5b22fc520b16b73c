//! In-memory proxy for network-free tests
//!
//! Available to downstream crates behind the `testing` feature.

use crate::error::Result;
use crate::proxy::{Proxy, ProxyRequest, ProxyResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// A proxy that answers from a canned URL→response table and records
/// every request it sees
///
/// # Examples
///
/// ```
/// use tablero_proxy::testing::StaticProxy;
/// use tablero_proxy::Proxy;
///
/// # tokio_test::block_on(async {
/// let proxy = StaticProxy::new()
/// 	.with_json("https://x/data", serde_json::json!([1, 2]))
/// 	.with_status("https://x/gone", 410, "gone");
///
/// assert!(proxy.get_json("https://x/data").await.is_ok());
/// assert!(proxy.get_json("https://x/gone").await.is_err());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct StaticProxy {
	responses: HashMap<String, ProxyResponse>,
	requests: Mutex<Vec<ProxyRequest>>,
}

impl StaticProxy {
	/// An empty proxy; unknown URLs answer 404
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a 200 JSON response for a URL
	pub fn with_json(mut self, url: impl Into<String>, body: Value) -> Self {
		self.responses
			.insert(url.into(), ProxyResponse { status: 200, body });
		self
	}

	/// Registers an arbitrary status with a text body for a URL
	pub fn with_status(mut self, url: impl Into<String>, status: u16, body: &str) -> Self {
		self.responses.insert(
			url.into(),
			ProxyResponse {
				status,
				body: Value::String(body.to_string()),
			},
		);
		self
	}

	/// Every request sent through this proxy, in order
	pub fn requests(&self) -> Vec<ProxyRequest> {
		self.requests.lock().expect("request log poisoned").clone()
	}
}

#[async_trait]
impl Proxy for StaticProxy {
	async fn send(&self, request: ProxyRequest) -> Result<ProxyResponse> {
		let response = self.responses.get(&request.url).cloned().unwrap_or(
			ProxyResponse {
				status: 404,
				body: Value::String("not found".to_string()),
			},
		);
		self.requests
			.lock()
			.expect("request log poisoned")
			.push(request);
		Ok(response)
	}
}
