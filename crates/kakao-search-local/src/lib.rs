// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Kakao Local keyword search client.
//!
//! Wraps `GET /v2/local/search/keyword.json`: builds the query string from a
//! [`SearchQuery`], authenticates with a `KakaoAK` REST key and parses the
//! JSON body into a [`KeywordSearchResponse`]. One request per call, no
//! retries and no paging.

pub mod client;
pub mod error;
pub mod types;

pub use client::LocalSearchClient;
pub use error::LocalSearchError;
pub use types::{
	KeywordSearchResponse, Place, PlaceDocument, SameName, SearchMeta, SearchQuery,
};
