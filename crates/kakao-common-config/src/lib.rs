// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration primitives shared by the Kakao search crates.
//!
//! - [`Secret<T>`] re-exported from [`kakao_common_secret`]
//! - [`load_dotenv`] / [`load_dotenv_file`] for `.env` files
//! - [`load_secret_env`] for `VAR` / `VAR_FILE` credentials

pub mod env;

pub use kakao_common_secret::{Secret, SecretString, REDACTED};

pub use env::{load_dotenv, load_dotenv_file, load_secret_env, DotenvError, SecretEnvError};
