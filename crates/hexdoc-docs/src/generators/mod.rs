//! Output generators for extracted documentation.

#[cfg(feature = "markdown")]
pub mod markdown;
