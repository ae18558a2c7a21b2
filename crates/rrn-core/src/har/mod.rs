//! HAR (HTTP Archive) loader: captured exchanges from browser or proxy exports.
//!
//! Each `log.entries[]` item becomes one [`Exchange`](crate::message::Exchange).
//! Entries with response status 0 (aborted or blocked requests) have no response.

mod load;
mod parse;

pub use load::{exchanges_from_slice, load_exchanges};
