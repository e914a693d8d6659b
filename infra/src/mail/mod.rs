//! Mail dispatch implementations
//!
//! `HttpMailService` posts messages to an HTTP mail provider;
//! `LoggingMailService` is a development stand-in that logs instead of
//! sending.

pub mod http;
pub mod logging;

pub use http::HttpMailService;
pub use logging::LoggingMailService;
