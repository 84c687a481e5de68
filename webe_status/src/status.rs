use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::StatusError;
use crate::registry::{self, StatusEntry};

/// A status code paired with the reason phrase that goes with it on the wire.
///
/// HTTP allows servers to send any reason phrase, so a `Status` does not have
/// to be one of the registered combinations. Use `is_standard` to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
  pub code: u16,
  pub reason: String,
}

impl Status {
  // custom status, nothing is validated
  pub fn new(code: u16, reason: &str) -> Status {
    return Status {
      code: code,
      reason: reason.to_owned(),
    };
  }

  // only for registered codes.
  // if you want a custom status, use Status::new
  pub fn from_standard_code(code: u16) -> Result<Status, StatusError> {
    let reason = registry::phrase_of(code)?;
    return Ok(Status::new(code, reason));
  }

  pub fn from_standard_reason(reason: &str) -> Result<Status, StatusError> {
    let code = registry::code_of(reason)?;
    return Ok(Status::new(code, reason));
  }

  /// True when the code is registered and the reason is exactly its canonical phrase.
  pub fn is_standard(&self) -> bool {
    match registry::phrase_of(self.code) {
      Ok(phrase) => phrase == self.reason,
      Err(_) => false,
    }
  }

  pub fn category(&self) -> Result<Category, StatusError> {
    Category::from_code(self.code)
  }
}

impl From<&StatusEntry> for Status {
  fn from(entry: &StatusEntry) -> Status {
    Status::new(entry.code(), entry.phrase())
  }
}

// the status line without the http version, ex: "404 Not Found"
impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} {}", self.code, self.reason)
  }
}
