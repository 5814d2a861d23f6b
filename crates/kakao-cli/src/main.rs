// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `kakao-search`: look up places by keyword through the Kakao Local API
//! and print `"<place name> - <address>"` lines.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use kakao_common_config::{load_dotenv, load_dotenv_file, load_secret_env, SecretString};
use kakao_search_local::{LocalSearchClient, SearchQuery};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod output;

const API_KEY_VAR: &str = "KAKAO_API_KEY";
const DEFAULT_KEYWORD: &str = "용인 기흥구 반려견 동반 카페";

/// Search Kakao Local places by keyword.
#[derive(Parser, Debug)]
#[command(name = "kakao-search", version, about, long_about = None)]
struct Args {
	/// Search keyword
	#[arg(default_value = DEFAULT_KEYWORD)]
	keyword: String,

	/// Longitude of the search center, sent as `x`
	#[arg(long, allow_negative_numbers = true)]
	x: Option<f64>,

	/// Latitude of the search center, sent as `y`
	#[arg(long, allow_negative_numbers = true)]
	y: Option<f64>,

	/// Search radius in meters around (x, y)
	#[arg(long)]
	radius: Option<u32>,

	/// Override the keyword search endpoint
	#[arg(long, env = "KAKAO_LOCAL_BASE_URL")]
	base_url: Option<String>,

	/// Extra env file to load (in addition to `.env`) before reading KAKAO_API_KEY
	#[arg(long)]
	env_file: Option<PathBuf>,

	/// Print the full parsed response as JSON instead of one line per place
	#[arg(long)]
	json: bool,

	/// Log level used when RUST_LOG is unset
	#[arg(short, long, env = "KAKAO_LOG_LEVEL", default_value = "warn")]
	log_level: String,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,
}

impl Args {
	fn query(&self) -> SearchQuery {
		SearchQuery {
			keyword: self.keyword.clone(),
			longitude: self.x,
			latitude: self.y,
			radius: self.radius,
		}
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	// Before parsing so `.env` can feed the `env = ...` arguments.
	let dotenv_path = load_dotenv();

	let args = Args::parse();
	init_logging(&args.log_level, args.json_logs);

	if let Some(path) = &dotenv_path {
		debug!(path = %path.display(), "Loaded .env");
	}

	exit_code(run(args).await)
}

/// Maps the run result to an exit status. A failure is printed to stderr
/// once; the tracing event is debug-only.
fn exit_code(result: Result<()>) -> ExitCode {
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			debug!(error = ?e, "kakao-search failed");
			eprintln!("error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(level: &str, json: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	let registry = tracing_subscriber::registry().with(filter);

	// stdout carries results only.
	if json {
		registry
			.with(fmt::layer().json().with_writer(io::stderr))
			.init();
	} else {
		registry.with(fmt::layer().with_writer(io::stderr)).init();
	}
}

async fn run(args: Args) -> Result<()> {
	if let Some(path) = &args.env_file {
		load_dotenv_file(path)?;
		debug!(path = %path.display(), "Loaded env file");
	}

	let api_key = load_secret_env(API_KEY_VAR)
		.with_context(|| format!("failed to load {API_KEY_VAR}"))?
		.unwrap_or_else(|| {
			debug!(var = API_KEY_VAR, "API key not set, sending an empty key");
			SecretString::empty()
		});

	let mut client = LocalSearchClient::new(api_key).context("failed to build HTTP client")?;
	if let Some(base_url) = &args.base_url {
		client = client.with_base_url(base_url.clone());
	}

	let query = args.query();
	info!(keyword = %query.keyword, endpoint = %client.base_url(), "Searching places");

	let response = client
		.search(&query)
		.await
		.with_context(|| format!("keyword search for {:?} failed", query.keyword))?;

	let mut out = io::stdout().lock();
	if args.json {
		output::write_json(&mut out, &response)?;
	} else {
		let count = output::write_places(&mut out, &response)?;
		debug!(count, "Printed places");
	}

	Ok(())
}
