//! Property-list document I/O for NovaBridge.
//!
//! Thin adapter between `.plist`/`.entitlements` files on disk and the
//! in-memory [`Document`](novabridge_types::Document) model. XML and binary
//! property lists are read; documents are always written back as XML.
//!
//! # Key Types
//!
//! - [`read_document`] / [`write_document`] -- File-level load and store
//! - [`to_document`] / [`from_document`] -- Conversion to and from `plist::Value`
//! - [`PlistIoError`] -- Everything that can go wrong at the file boundary

pub mod convert;
pub mod error;
pub mod io;

pub use convert::{from_document, from_value, to_document, to_value};
pub use error::{PlistIoError, Result};
pub use io::{read_document, write_document};
