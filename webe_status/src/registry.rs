use serde::Serialize;

use crate::category::Category;
use crate::error::{LookupKey, StatusError};
use crate::table::ENTRIES;

/// One registered status: a code, its canonical reason phrase and the category
/// derived from the code.
///
/// Entries only exist inside the registry table, so every `StatusEntry` a
/// caller can see is a `&'static` one.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
  pub(crate) code: u16,
  pub(crate) phrase: &'static str,
  pub(crate) category: Category,
  pub(crate) reference: &'static str, // defining IETF document
  pub(crate) deprecated: bool,
}

impl StatusEntry {
  pub fn code(&self) -> u16 {
    self.code
  }

  pub fn phrase(&self) -> &'static str {
    self.phrase
  }

  pub fn category(&self) -> Category {
    self.category
  }

  pub fn reference(&self) -> &'static str {
    self.reference
  }

  // still registered and classified normally, callers may want to avoid sending it
  pub fn is_deprecated(&self) -> bool {
    self.deprecated
  }
}

/// The full registry, ordered by code.
pub fn entries() -> &'static [StatusEntry] {
  ENTRIES
}

pub fn lookup_by_code(code: u16) -> Result<&'static StatusEntry, StatusError> {
  match ENTRIES.binary_search_by_key(&code, |entry| entry.code) {
    Ok(index) => Ok(&ENTRIES[index]),
    Err(_) => {
      log::trace!("no registered status for code {}", code);
      Err(StatusError::NotFound(LookupKey::Code(code)))
    }
  }
}

/// Exact, case-sensitive match against the canonical phrases. No trimming.
pub fn lookup_by_phrase(phrase: &str) -> Result<&'static StatusEntry, StatusError> {
  match ENTRIES.iter().find(|entry| entry.phrase == phrase) {
    Some(entry) => Ok(entry),
    None => {
      log::trace!("no registered status for phrase {:?}", phrase);
      Err(StatusError::NotFound(LookupKey::Phrase(phrase.to_owned())))
    }
  }
}

/// Canonical reason phrase for a registered code.
///
/// Unlike [`category_of`](crate::category_of) this only knows the registered
/// codes: 499 is a valid client error but has no phrase, so it fails with
/// `UnknownCode` the same way 777 does.
pub fn phrase_of(code: u16) -> Result<&'static str, StatusError> {
  match lookup_by_code(code) {
    Ok(entry) => Ok(entry.phrase),
    Err(_) => Err(StatusError::UnknownCode(code)),
  }
}

pub fn code_of(phrase: &str) -> Result<u16, StatusError> {
  match lookup_by_phrase(phrase) {
    Ok(entry) => Ok(entry.code),
    Err(_) => Err(StatusError::UnknownPhrase(phrase.to_owned())),
  }
}
