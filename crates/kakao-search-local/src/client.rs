// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Kakao Local API client implementation.

use kakao_common_secret::SecretString;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, error, instrument, trace, warn};

use crate::error::LocalSearchError;
use crate::types::{KeywordSearchResponse, SearchQuery};

const DEFAULT_BASE_URL: &str = "https://dapi.kakao.com/v2/local/search/keyword.json";
const AUTH_SCHEME: &str = "KakaoAK";

/// Client for the Kakao Local keyword search endpoint.
#[derive(Debug, Clone)]
pub struct LocalSearchClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
}

/// Error body Kakao returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct KakaoErrorBody {
	#[serde(rename = "errorType")]
	error_type: Option<String>,
	message: Option<String>,
}

impl LocalSearchClient {
	/// Creates a client authenticating with the given REST API key.
	///
	/// An empty key is accepted; Kakao rejects the request with a 401.
	pub fn new(api_key: SecretString) -> Result<Self, LocalSearchError> {
		if api_key.is_empty() {
			warn!("Kakao API key is empty, requests will be rejected");
		}

		// No request timeout: the call waits as long as the HTTP stack does.
		let http_client = kakao_common_http::builder().build()?;

		Ok(Self {
			http_client,
			api_key,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Sets a custom endpoint URL (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Runs one keyword search. Failures are returned as-is, never retried.
	#[instrument(skip(self, query), fields(keyword = %query.keyword))]
	pub async fn search(&self, query: &SearchQuery) -> Result<KeywordSearchResponse, LocalSearchError> {
		if query.keyword.is_empty() {
			return Err(LocalSearchError::EmptyKeyword);
		}

		let mut url = Url::parse(&self.base_url)
			.map_err(|e| LocalSearchError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

		let pairs = query.query_pairs();
		url.query_pairs_mut().extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));

		debug!(url = %self.base_url, "Sending keyword search to Kakao");
		trace!(params = ?pairs, "Search parameters");

		let response = self
			.http_client
			.get(url)
			.header(AUTHORIZATION, self.authorization()?)
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "Network error during Kakao request");
				LocalSearchError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Kakao");

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			LocalSearchError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		if !status.is_success() {
			let message = error_message(&body);

			if status == StatusCode::UNAUTHORIZED {
				error!(status = status.as_u16(), message = %message, "Unauthorized request");
				return Err(LocalSearchError::Unauthorized { message });
			}

			error!(status = status.as_u16(), message = %message, "Kakao API error");
			return Err(LocalSearchError::ApiError {
				status: status.as_u16(),
				message,
			});
		}

		let parsed: KeywordSearchResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Kakao response");
			LocalSearchError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(
			result_count = parsed.documents.as_ref().map(Vec::len),
			total_count = parsed.meta.as_ref().map(|m| m.total_count),
			"Search completed"
		);

		Ok(parsed)
	}

	fn authorization(&self) -> Result<HeaderValue, LocalSearchError> {
		let mut value = HeaderValue::from_str(&format!("{AUTH_SCHEME} {}", self.api_key.expose()))
			.map_err(|_| LocalSearchError::InvalidApiKey)?;
		value.set_sensitive(true);
		Ok(value)
	}
}

/// Prefers Kakao's structured `errorType: message`, falling back to the raw body.
fn error_message(body: &str) -> String {
	match serde_json::from_str::<KakaoErrorBody>(body) {
		Ok(KakaoErrorBody {
			error_type: Some(kind),
			message: Some(message),
		}) => format!("{kind}: {message}"),
		Ok(KakaoErrorBody {
			message: Some(message),
			..
		}) => message,
		_ => body.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn client(key: &str) -> LocalSearchClient {
		LocalSearchClient::new(SecretString::new(key.to_string())).unwrap()
	}

	#[test]
	fn test_client_creation() {
		let client = client("test-api-key");
		assert_eq!(client.api_key.expose(), "test-api-key");
		assert_eq!(client.base_url(), DEFAULT_BASE_URL);
	}

	#[test]
	fn test_with_base_url() {
		let client = client("key").with_base_url("http://127.0.0.1:9000/search");
		assert_eq!(client.base_url(), "http://127.0.0.1:9000/search");
	}

	#[test]
	fn debug_output_hides_key() {
		let out = format!("{:?}", client("very-secret-rest-key"));
		assert!(!out.contains("very-secret-rest-key"));
	}

	#[test]
	fn authorization_uses_kakao_scheme() {
		let value = client("abc123").authorization().unwrap();
		assert_eq!(value.to_str().unwrap(), "KakaoAK abc123");
		assert!(value.is_sensitive());
	}

	#[test]
	fn authorization_with_empty_key_still_builds() {
		let value = LocalSearchClient::new(SecretString::empty())
			.unwrap()
			.authorization()
			.unwrap();
		assert_eq!(value.to_str().unwrap(), "KakaoAK ");
	}

	#[test]
	fn key_with_newline_is_rejected() {
		assert!(matches!(
			client("bad\nkey").authorization(),
			Err(LocalSearchError::InvalidApiKey)
		));
	}

	#[test]
	fn error_message_prefers_structured_body() {
		assert_eq!(
			error_message(r#"{"errorType":"AccessDeniedError","message":"cannot find appkey"}"#),
			"AccessDeniedError: cannot find appkey"
		);
		assert_eq!(error_message(r#"{"message":"bad request"}"#), "bad request");
		assert_eq!(error_message("<html>oops</html>"), "<html>oops</html>");
	}

	#[tokio::test]
	async fn empty_keyword_is_rejected_before_sending() {
		let client = client("key").with_base_url("http://127.0.0.1:1/unused");
		let result = client.search(&SearchQuery::new("")).await;
		assert!(matches!(result, Err(LocalSearchError::EmptyKeyword)));
	}

	#[tokio::test]
	async fn unparseable_base_url_is_reported() {
		let client = client("key").with_base_url("not a url");
		let result = client.search(&SearchQuery::new("coffee")).await;
		assert!(matches!(result, Err(LocalSearchError::InvalidUrl(_))));
	}
}
