//! Backend gateway: wire types, error taxonomy, form encoding, and the
//! HTTP calls themselves.
//!
//! DESIGN
//! ======
//! Each remote operation is one async function in `api`. The multipart
//! field layout for the placement request lives in `forms` as a pure
//! function so tests can assert on the exact encoding without a browser.

pub mod api;
pub mod error;
pub mod forms;
pub mod types;
