// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rendering search results to stdout.

use std::io::Write;

use anyhow::Result;
use kakao_search_local::KeywordSearchResponse;

/// Writes one `"<place_name> - <address_name>"` line per document, in
/// response order, and returns how many were written.
///
/// Fails with [`kakao_search_local::LocalSearchError::MissingDocuments`]
/// before writing anything when the response has no `documents`.
pub fn write_places<W: Write>(out: &mut W, response: &KeywordSearchResponse) -> Result<usize> {
	let places = response.places()?;
	for place in &places {
		writeln!(out, "{place}")?;
	}
	Ok(places.len())
}

/// Writes the whole parsed response as pretty JSON.
pub fn write_json<W: Write>(out: &mut W, response: &KeywordSearchResponse) -> Result<()> {
	serde_json::to_writer_pretty(&mut *out, response)?;
	writeln!(out)?;
	Ok(())
}
