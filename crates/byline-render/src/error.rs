//! Error type for `byline-render`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The post body markup could not be parsed.
  #[error("post body could not be parsed: {0}")]
  Parse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
