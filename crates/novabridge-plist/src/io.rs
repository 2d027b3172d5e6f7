//! File-level document load and store.

use std::fs;
use std::io::{BufWriter, Cursor, ErrorKind, Write};
use std::path::Path;

use novabridge_types::Document;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::convert::{from_document, to_document};
use crate::error::{PlistIoError, Result};

/// Load a property-list document.
///
/// A missing file, or one that is empty or whitespace-only, yields an empty
/// document. Anything else must parse as a property list whose root is a
/// dictionary.
pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "document missing; starting empty");
            return Ok(Document::new());
        }
        Err(source) => {
            return Err(PlistIoError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        debug!(path = %path.display(), "document empty; starting empty");
        return Ok(Document::new());
    }

    let parsed = plist::Value::from_reader(Cursor::new(bytes)).map_err(|source| {
        PlistIoError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let doc = match parsed {
        plist::Value::Dictionary(dict) => to_document(&dict)?,
        other => {
            let kind = root_kind(&other);
            return Err(PlistIoError::NotADictionary {
                path: path.to_path_buf(),
                kind,
            });
        }
    };

    debug!(path = %path.display(), keys = doc.len(), "document loaded");
    Ok(doc)
}

/// Write a document as an XML property list, creating parent directories.
///
/// The XML goes to a temporary file beside `path` that is then renamed over
/// it, so a failed write leaves any previous content in place.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let io_err = |source: std::io::Error| PlistIoError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(io_err)?;
            parent
        }
        None => Path::new("."),
    };

    let root = plist::Value::Dictionary(from_document(doc)?);
    let mut staged = NamedTempFile::new_in(parent).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        root.to_writer_xml(&mut writer)
            .map_err(|source| PlistIoError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }
    staged.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), keys = doc.len(), "document written");
    Ok(())
}

fn root_kind(value: &plist::Value) -> &'static str {
    match value {
        plist::Value::Array(_) => "array",
        plist::Value::String(_) => "string",
        plist::Value::Boolean(_) => "boolean",
        plist::Value::Integer(_) => "integer",
        plist::Value::Real(_) => "real",
        plist::Value::Date(_) => "date",
        plist::Value::Data(_) => "data",
        _ => "other",
    }
}
