use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// The class of a status code, decided by its hundreds digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  Informational, // 1xx
  Success, // 2xx
  Redirection, // 3xx
  #[serde(rename = "Client Error")]
  ClientError, // 4xx
  #[serde(rename = "Server Error")]
  ServerError, // 5xx
}

impl Category {
  pub const ALL: [Category; 5] = [
    Category::Informational,
    Category::Success,
    Category::Redirection,
    Category::ClientError,
    Category::ServerError,
  ];

  /// Classifies any code in 100-599, registered or not.
  /// Usable in const context so the registry can derive categories at build time.
  pub const fn classify(code: u16) -> Option<Category> {
    match code {
      100..=199 => Some(Category::Informational),
      200..=299 => Some(Category::Success),
      300..=399 => Some(Category::Redirection),
      400..=499 => Some(Category::ClientError),
      500..=599 => Some(Category::ServerError),
      _ => None,
    }
  }

  pub fn from_code(code: u16) -> Result<Category, StatusError> {
    match Category::classify(code) {
      Some(category) => Ok(category),
      None => {
        log::trace!("can't classify status code {}", code);
        Err(StatusError::InvalidCode(code))
      }
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Informational => "Informational",
      Category::Success => "Success",
      Category::Redirection => "Redirection",
      Category::ClientError => "Client Error",
      Category::ServerError => "Server Error",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = StatusError;

  // display strings only, same exact-match rule as reason phrases
  fn from_str(s: &str) -> Result<Category, StatusError> {
    match Category::ALL.iter().find(|category| category.as_str() == s) {
      Some(category) => Ok(*category),
      None => Err(StatusError::UnknownCategory(s.to_owned())),
    }
  }
}

pub fn category_of(code: u16) -> Result<Category, StatusError> {
  Category::from_code(code)
}
