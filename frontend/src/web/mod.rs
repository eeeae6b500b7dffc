//! Thin wrappers over the native browser APIs.
//!
//! Wrapping `web_sys` directly instead of pulling in the `gloo-*`
//! crates keeps the WASM binary small.

mod http;
pub mod route;
pub mod router;
mod storage;

pub use http::HttpClient;
pub use storage::LocalStorage;
