//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`selection`, `catalog`, `result`, `search`,
//! `notify`) so individual components depend on small focused models. Every
//! domain is a plain struct mutated through methods; components wrap them
//! in `RwSignal`s provided via context, which keeps the whole request and
//! selection lifecycle unit-testable without a browser.

pub mod catalog;
pub mod notify;
pub mod requests;
pub mod result;
pub mod search;
pub mod selection;
pub mod session;
