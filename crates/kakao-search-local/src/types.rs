// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response types for the keyword search endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LocalSearchError;

/// Parameters for one keyword search.
///
/// Optional parameters follow a "truthy" rule: `x`/`y` are sent only when
/// both coordinates are set and non-zero, `radius` only when set and
/// non-zero. A coordinate of exactly `0` therefore drops the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
	pub keyword: String,
	/// Longitude, sent as `x`.
	pub longitude: Option<f64>,
	/// Latitude, sent as `y`.
	pub latitude: Option<f64>,
	/// Search radius in meters. Kakao only honours it alongside a coordinate pair.
	pub radius: Option<u32>,
}

impl SearchQuery {
	pub fn new(keyword: impl Into<String>) -> Self {
		Self {
			keyword: keyword.into(),
			longitude: None,
			latitude: None,
			radius: None,
		}
	}

	pub fn with_coordinates(mut self, longitude: f64, latitude: f64) -> Self {
		self.longitude = Some(longitude);
		self.latitude = Some(latitude);
		self
	}

	pub fn with_radius(mut self, radius: u32) -> Self {
		self.radius = Some(radius);
		self
	}

	/// The query string parameters this search sends, in order.
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = vec![("query", self.keyword.clone())];

		if let (Some(x), Some(y)) = (self.longitude, self.latitude) {
			if x != 0.0 && y != 0.0 {
				pairs.push(("x", x.to_string()));
				pairs.push(("y", y.to_string()));
			}
		}

		if let Some(radius) = self.radius.filter(|r| *r != 0) {
			pairs.push(("radius", radius.to_string()));
		}

		pairs
	}
}

/// Parsed body of a keyword search response.
///
/// `documents` stays optional here so that a body without it still parses;
/// the lookup failure is reported by [`KeywordSearchResponse::documents`].
/// Top-level keys other than `documents` and `meta` (Kakao's `errorType`
/// and `message`, for instance) are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSearchResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub documents: Option<Vec<PlaceDocument>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<SearchMeta>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl KeywordSearchResponse {
	pub fn documents(&self) -> Result<&[PlaceDocument], LocalSearchError> {
		self
			.documents
			.as_deref()
			.ok_or(LocalSearchError::MissingDocuments)
	}

	/// Name/address projection of every document, in response order.
	pub fn places(&self) -> Result<Vec<Place>, LocalSearchError> {
		Ok(self.documents()?.iter().map(Place::from).collect())
	}
}

/// One place record. Kakao sends every field as a string, coordinates and
/// distance included, and uses `""` for absent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDocument {
	pub place_name: String,
	pub address_name: String,
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub road_address_name: String,
	#[serde(default)]
	pub category_name: String,
	#[serde(default)]
	pub category_group_code: String,
	#[serde(default)]
	pub category_group_name: String,
	#[serde(default)]
	pub phone: String,
	#[serde(default)]
	pub x: String,
	#[serde(default)]
	pub y: String,
	#[serde(default)]
	pub place_url: String,
	/// Meters from the query coordinates; empty without them.
	#[serde(default)]
	pub distance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMeta {
	#[serde(default)]
	pub total_count: u64,
	#[serde(default)]
	pub pageable_count: u64,
	#[serde(default)]
	pub is_end: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub same_name: Option<SameName>,
}

/// How Kakao split the query into a region part and a keyword part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SameName {
	#[serde(default)]
	pub region: Vec<String>,
	#[serde(default)]
	pub keyword: String,
	#[serde(default)]
	pub selected_region: String,
}

/// The name and address of one result. Displays as `"<name> - <address>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
	pub name: String,
	pub address: String,
}

impl From<&PlaceDocument> for Place {
	fn from(doc: &PlaceDocument) -> Self {
		Self {
			name: doc.place_name.clone(),
			address: doc.address_name.clone(),
		}
	}
}

impl fmt::Display for Place {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} - {}", self.name, self.address)
	}
}
