//! # Tiffin
//!
//! Async client for the [Lunch Money](https://lunchmoney.app) personal-finance API.
//!
//! ## Overview
//!
//! - **One client type**, [`LunchMoney`], holding the base URL, the bearer
//!   header and a transport. Configuration is fixed at construction.
//! - **One request per operation.** No retries, caching or pagination.
//! - **Loosely-typed results.** List and entity endpoints return
//!   [`ResultObject`]s that keep every field the API sent; mutations return
//!   the ids or flags the API documents.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client construction, request dispatch, response wrapping |
//! | [`config`] | Base URL and API key resolution |
//! | [`domain`] | Result objects, date windows, typed payloads |
//! | [`error`] | Client and lookup errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`params`] | Request parameters and their encoding |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tiffin::{DateWindow, LunchMoney, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tiffin::ClientError> {
//!     // Empty key: read LUNCH_MONEY_API_KEY instead.
//!     let client = LunchMoney::new("")?;
//!
//!     for tx in client.transactions(DateWindow::new(), Params::new()).await? {
//!         println!("{tx} {}", tx.attr("amount").map(|v| v.to_string()).unwrap_or_default());
//!     }
//!
//!     let id = client
//!         .create_category("Coffee", Params::new().with("exclude_from_budget", true))
//!         .await?;
//!     println!("created category {id}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use tiffin::ClientError;
//!
//! fn describe(error: &ClientError) -> String {
//!     match error {
//!         ClientError::MissingApiKey => String::from("configure an API key"),
//!         ClientError::Api { message } => format!("Lunch Money said: {message}"),
//!         other => other.to_string(),
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! The API key is only ever placed in the `authorization` header. It is
//! redacted from `Debug` output and never logged.

pub mod client;
pub mod config;
pub mod domain;
mod endpoints;
pub mod error;
pub mod http_client;
pub mod params;

pub use client::{ApiRequest, LunchMoney};

pub use config::{ClientConfig, ResolvedConfig, API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_VERSION};

pub use domain::{DateWindow, NewTransaction, ResultObject, TransactionUpdate};

pub use error::{ClientError, LookupError};

pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use params::Params;
