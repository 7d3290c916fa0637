//! Timeline app: drives the fetch sequence and renders the result to a sink.
pub mod platform;
