use std::fmt;

use thiserror::Error;

// what a full-entry lookup was keyed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
  Code(u16),
  Phrase(String),
}

impl fmt::Display for LookupKey {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      LookupKey::Code(code) => write!(f, "code {}", code),
      LookupKey::Phrase(phrase) => write!(f, "phrase {:?}", phrase),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
  #[error("status code {0} is outside of 100-599")]
  InvalidCode(u16), // can't be classified
  #[error("status code {0} has no standard reason phrase")]
  UnknownCode(u16), // in range (or not), but not one of the registered codes
  #[error("{0:?} is not a standard reason phrase")]
  UnknownPhrase(String), // exact match only, so case and whitespace matter
  #[error("no registered status for {0}")]
  NotFound(LookupKey), // full entry lookups
  #[error("{0:?} is not a status category")]
  UnknownCategory(String),
}
