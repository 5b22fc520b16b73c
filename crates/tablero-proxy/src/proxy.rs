//! The forwarding contract and its HTTP implementation

use crate::error::{ProxyError, Result};
use async_trait::async_trait;
use serde_json::Value;
use tablero_schema::HttpMethod;
use tracing::debug;

/// One forwarded request
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRequest {
	/// HTTP method
	pub method: HttpMethod,
	/// Absolute upstream URL
	pub url: String,
	/// Optional JSON body
	pub body: Option<Value>,
}

impl ProxyRequest {
	/// A bodyless GET request
	pub fn get(url: impl Into<String>) -> Self {
		Self {
			method: HttpMethod::Get,
			url: url.into(),
			body: None,
		}
	}

	/// A POST request carrying a JSON body
	pub fn post(url: impl Into<String>, body: Value) -> Self {
		Self {
			method: HttpMethod::Post,
			url: url.into(),
			body: Some(body),
		}
	}
}

/// The upstream response, status and body verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
	/// Upstream HTTP status
	pub status: u16,
	/// Upstream body; a plain string when it was not parseable as JSON
	pub body: Value,
}

impl ProxyResponse {
	/// Whether the status is in the 2xx range
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Generic proxy contract
///
/// Implementations forward `{method, url, body?}` to an arbitrary
/// absolute URL and hand back the upstream status/body. Engines depend
/// only on this trait so they stay testable without a network.
#[async_trait]
pub trait Proxy: Send + Sync {
	/// Forwards one request
	async fn send(&self, request: ProxyRequest) -> Result<ProxyResponse>;

	/// Issues a GET and returns the JSON body of a successful response
	///
	/// A non-success status becomes [`ProxyError::Status`] carrying the
	/// original status code.
	async fn get_json(&self, url: &str) -> Result<Value> {
		let response = self.send(ProxyRequest::get(url)).await?;
		if !response.is_success() {
			return Err(ProxyError::Status {
				status: response.status,
				message: body_excerpt(&response.body),
			});
		}
		Ok(response.body)
	}
}

fn body_excerpt(body: &Value) -> String {
	let text = match body {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	};
	text.chars().take(200).collect()
}

/// `reqwest`-backed proxy implementation
#[derive(Debug, Clone, Default)]
pub struct HttpProxy {
	client: reqwest::Client,
}

impl HttpProxy {
	/// Create a proxy with a fresh client
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a proxy over an existing client (shared pools, headers)
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Proxy for HttpProxy {
	async fn send(&self, request: ProxyRequest) -> Result<ProxyResponse> {
		debug!(method = request.method.as_str(), url = %request.url, "proxy send");

		let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
			.map_err(|e| ProxyError::Shape(e.to_string()))?;
		let mut builder = self.client.request(method, &request.url);
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}

		let response = builder.send().await?;
		let status = response.status().as_u16();
		let text = response.text().await?;

		// Verbatim pass-through: JSON when it parses, text fallback otherwise.
		let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

		Ok(ProxyResponse { status, body })
	}
}
