//! Canonical reason phrases and categories for HTTP status codes.
//!
//! The registry is a single static table. Every lookup is a pure read, so the
//! functions here can be called from any number of threads without setup.
//!
//! ```
//! use webe_status::{category_of, code_of, phrase_of, Category};
//!
//! assert_eq!(phrase_of(404), Ok("Not Found"));
//! assert_eq!(code_of("Not Found"), Ok(404));
//! assert_eq!(category_of(418), Ok(Category::ClientError));
//! ```

extern crate log;
extern crate serde;
extern crate thiserror;

pub mod category;
pub mod error;
pub mod registry;
pub mod status;
mod table;

pub use category::{category_of, Category};
pub use error::{LookupKey, StatusError};
pub use registry::{code_of, entries, lookup_by_code, lookup_by_phrase, phrase_of, StatusEntry};
pub use status::Status;
pub use table::{code, phrase};
