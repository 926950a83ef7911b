//! # API Module
//!
//! HTTP handlers for the short-lived local server that receives the Spotify
//! OAuth redirect during `spotlist auth`.
//!
//! - [`callback`] - completes the PKCE flow by exchanging the authorization
//!   code for a token and storing it in the shared state the auth flow polls.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotlist::api::callback;
//!
//! let app = Router::new().route("/callback", get(callback));
//! ```

mod callback;

pub use callback::callback;
