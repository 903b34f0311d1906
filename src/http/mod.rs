//! HTTP client layer — `NomicsHttp`, one blocking GET per call.

pub mod client;

pub use client::NomicsHttp;
