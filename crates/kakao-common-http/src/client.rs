// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use reqwest::{Client, ClientBuilder};

/// Workspace version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a client builder carrying the standard User-Agent.
///
/// Callers layer their own settings on top:
///
/// ```ignore
/// let client = kakao_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// `{os}-{arch}`, e.g. `linux-x86_64`.
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Format: `kakao-search/{version}/{platform}`.
pub fn user_agent() -> String {
	format!("kakao-search/{VERSION}/{}", platform())
}
