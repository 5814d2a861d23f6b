// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Kakao Local client.

use thiserror::Error;

/// Errors from a keyword search. None of them are retried.
#[derive(Debug, Error)]
pub enum LocalSearchError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// HTTP 401. Kakao answers this for a missing, empty or malformed key.
	#[error("Unauthorized: {message}")]
	Unauthorized { message: String },

	/// Any other non-success status.
	#[error("Kakao API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// Body was not JSON, or a document lacked a required field.
	#[error("Invalid response from Kakao: {0}")]
	InvalidResponse(String),

	/// The response has no `documents` list.
	#[error("response has no `documents` field")]
	MissingDocuments,

	#[error("search keyword is empty")]
	EmptyKeyword,

	#[error("invalid base URL: {0}")]
	InvalidUrl(String),

	/// The key contains characters that cannot appear in an HTTP header.
	#[error("API key is not a valid header value")]
	InvalidApiKey,
}
