// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment loading.
//!
//! Variables already present in the process environment always win over a
//! `.env` file; the file only fills gaps.

use std::path::{Path, PathBuf};
use std::{env, fs};

use kakao_common_secret::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

#[derive(Debug, Error)]
#[error("failed to load env file {path}: {source}")]
pub struct DotenvError {
	pub path: PathBuf,
	#[source]
	pub source: dotenvy::Error,
}

/// Load the nearest `.env` file (current directory or any parent).
///
/// Returns the path that was loaded, or `None` when there is no file or it
/// cannot be parsed. A missing `.env` is the normal case.
pub fn load_dotenv() -> Option<PathBuf> {
	dotenvy::dotenv().ok()
}

/// Load an explicitly named env file. Unlike [`load_dotenv`], a missing or
/// malformed file is an error.
pub fn load_dotenv_file(path: &Path) -> Result<(), DotenvError> {
	dotenvy::from_path(path).map_err(|source| DotenvError {
		path: path.to_path_buf(),
		source,
	})
}

/// Load a secret using the `VAR` / `VAR_FILE` convention.
///
/// `{var}_FILE` takes precedence and names a file whose content is the
/// secret, minus a single trailing newline. Otherwise `{var}` is used
/// verbatim. Returns `Ok(None)` when neither is set.
///
/// ```no_run
/// use kakao_common_config::load_secret_env;
///
/// if let Some(key) = load_secret_env("KAKAO_API_KEY")? {
///     println!("key configured: {key}"); // prints "[REDACTED]"
/// }
/// # Ok::<(), kakao_common_config::SecretEnvError>(())
/// ```
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(SecretString::new(secret)));
	}

	Ok(env::var(var).ok().map(SecretString::new))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	// Each test owns a distinct variable name so they can run in parallel.

	#[test]
	fn returns_none_when_not_set() {
		let var = "KAKAO_TEST_UNSET_KEY";
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));

		assert!(load_secret_env(var).unwrap().is_none());
	}

	#[test]
	fn reads_direct_value() {
		let var = "KAKAO_TEST_DIRECT_KEY";
		env::set_var(var, "direct-key");
		env::remove_var(format!("{var}_FILE"));

		let key = load_secret_env(var).unwrap().unwrap();
		assert_eq!(key.expose(), "direct-key");

		env::remove_var(var);
	}

	#[test]
	fn empty_value_is_still_a_value() {
		let var = "KAKAO_TEST_EMPTY_KEY";
		env::set_var(var, "");

		let key = load_secret_env(var).unwrap().unwrap();
		assert!(key.is_empty());

		env::remove_var(var);
	}

	#[test]
	fn file_var_wins_and_strips_one_newline() {
		let var = "KAKAO_TEST_FILE_KEY";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "file-key").unwrap();

		env::set_var(var, "direct-key");
		env::set_var(format!("{var}_FILE"), file.path().to_str().unwrap());

		let key = load_secret_env(var).unwrap().unwrap();
		assert_eq!(key.expose(), "file-key");

		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn missing_file_is_an_error() {
		let var = "KAKAO_TEST_MISSING_FILE_KEY";
		env::set_var(format!("{var}_FILE"), "/nonexistent/kakao/key");

		assert!(matches!(
			load_secret_env(var),
			Err(SecretEnvError::Io { .. })
		));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn empty_file_path_is_an_error() {
		let var = "KAKAO_TEST_EMPTY_PATH_KEY";
		env::set_var(format!("{var}_FILE"), "");

		assert!(matches!(
			load_secret_env(var),
			Err(SecretEnvError::EmptyPath { .. })
		));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn env_file_populates_unset_vars_only() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "KAKAO_TEST_DOTENV_NEW=from-file").unwrap();
		writeln!(file, "KAKAO_TEST_DOTENV_KEPT=from-file").unwrap();

		env::remove_var("KAKAO_TEST_DOTENV_NEW");
		env::set_var("KAKAO_TEST_DOTENV_KEPT", "from-process");

		load_dotenv_file(file.path()).unwrap();

		assert_eq!(env::var("KAKAO_TEST_DOTENV_NEW").unwrap(), "from-file");
		assert_eq!(env::var("KAKAO_TEST_DOTENV_KEPT").unwrap(), "from-process");

		env::remove_var("KAKAO_TEST_DOTENV_NEW");
		env::remove_var("KAKAO_TEST_DOTENV_KEPT");
	}

	#[test]
	fn missing_env_file_is_an_error() {
		let err = load_dotenv_file(Path::new("/nonexistent/kakao/.env")).unwrap_err();
		assert!(err.to_string().contains("/nonexistent/kakao/.env"));
	}
}
