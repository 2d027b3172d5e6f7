//! Conversion between `plist::Value` and the NovaBridge value model.

use novabridge_types::{Document, Scalar, Value};

use crate::error::{PlistIoError, Result};

/// Convert a parsed property-list value.
pub fn to_value(value: &plist::Value) -> Result<Value> {
    to_value_at(value, "")
}

/// Convert a parsed property-list dictionary.
pub fn to_document(dict: &plist::Dictionary) -> Result<Document> {
    to_document_at(dict, "")
}

/// Convert a value back into a property-list value.
pub fn from_value(value: &Value) -> Result<plist::Value> {
    from_value_at(value, "")
}

/// Convert a document back into a property-list dictionary.
pub fn from_document(doc: &Document) -> Result<plist::Dictionary> {
    from_document_at(doc, "")
}

fn child_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}.{segment}")
    }
}

fn to_document_at(dict: &plist::Dictionary, key_path: &str) -> Result<Document> {
    dict.iter()
        .map(|(k, v)| Ok((k.clone(), to_value_at(v, &child_path(key_path, k))?)))
        .collect()
}

fn to_value_at(value: &plist::Value, key_path: &str) -> Result<Value> {
    let converted = match value {
        plist::Value::String(s) => Value::Scalar(Scalar::String(s.clone())),
        plist::Value::Boolean(b) => Value::Scalar(Scalar::Boolean(*b)),
        plist::Value::Integer(i) => {
            let wide = match i.as_signed() {
                Some(signed) => i128::from(signed),
                None => i.as_unsigned().map(i128::from).ok_or_else(|| {
                    PlistIoError::UnsupportedValue {
                        key_path: key_path.to_string(),
                        kind: "integer",
                    }
                })?,
            };
            Value::Scalar(Scalar::Integer(wide))
        }
        plist::Value::Real(r) => Value::Scalar(Scalar::Real(*r)),
        plist::Value::Date(d) => Value::Scalar(Scalar::Date(d.to_xml_format())),
        plist::Value::Data(bytes) => Value::Scalar(Scalar::Data(bytes.clone())),
        plist::Value::Array(items) => Value::Sequence(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| to_value_at(item, &child_path(key_path, &i.to_string())))
                .collect::<Result<Vec<_>>>()?,
        ),
        plist::Value::Dictionary(dict) => Value::Mapping(to_document_at(dict, key_path)?),
        plist::Value::Uid(_) => {
            return Err(PlistIoError::UnsupportedValue {
                key_path: key_path.to_string(),
                kind: "uid",
            })
        }
        _ => {
            return Err(PlistIoError::UnsupportedValue {
                key_path: key_path.to_string(),
                kind: "unknown",
            })
        }
    };
    Ok(converted)
}

fn from_document_at(doc: &Document, key_path: &str) -> Result<plist::Dictionary> {
    let mut dict = plist::Dictionary::new();
    for (k, v) in doc {
        dict.insert(k.clone(), from_value_at(v, &child_path(key_path, k))?);
    }
    Ok(dict)
}

fn from_value_at(value: &Value, key_path: &str) -> Result<plist::Value> {
    let converted = match value {
        Value::Scalar(Scalar::String(s)) => plist::Value::String(s.clone()),
        Value::Scalar(Scalar::Boolean(b)) => plist::Value::Boolean(*b),
        Value::Scalar(Scalar::Integer(i)) => {
            let integer = if let Ok(signed) = i64::try_from(*i) {
                plist::Integer::from(signed)
            } else if let Ok(unsigned) = u64::try_from(*i) {
                plist::Integer::from(unsigned)
            } else {
                return Err(PlistIoError::IntegerOutOfRange {
                    key_path: key_path.to_string(),
                    value: *i,
                });
            };
            plist::Value::Integer(integer)
        }
        Value::Scalar(Scalar::Real(r)) => plist::Value::Real(*r),
        Value::Scalar(Scalar::Date(d)) => {
            let date = plist::Date::from_xml_format(d).map_err(|_| PlistIoError::InvalidDate {
                key_path: key_path.to_string(),
                value: d.clone(),
            })?;
            plist::Value::Date(date)
        }
        Value::Scalar(Scalar::Data(bytes)) => plist::Value::Data(bytes.clone()),
        Value::Sequence(items) => plist::Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| from_value_at(item, &child_path(key_path, &i.to_string())))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(doc) => plist::Value::Dictionary(from_document_at(doc, key_path)?),
    };
    Ok(converted)
}
