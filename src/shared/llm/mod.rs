//! Helpers for post-processing generative model output.

pub mod formatter;

pub use formatter::format_response_text;
