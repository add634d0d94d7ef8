/// Filename metadata decoder.
///
/// Dataset filenames carry their labels in the stem:
/// `<age>_<genderIndex>_<ethnicityIndex>_<timestamp>`, e.g.
/// `25_1_2_20170109150557335.jpg`. The two indices address the label sets
/// positionally (see [`crate::model::labels`]).
///
/// Decoding is strict: wrong field count, a non-integer field, or an index
/// outside its label set is an error. Errors are never recovered — the
/// caller aborts the run on the first bad filename.
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::labels::{Ethnicity, Gender};
use crate::model::record::FaceRecord;

/// Why a filename could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The path has no UTF-8 stem to decode (no file name, or non-UTF-8).
    #[error("`{}`: file name has no decodable stem", path.display())]
    Stem { path: PathBuf },

    /// The stem did not split into exactly four `_`-separated fields.
    #[error("`{stem}`: expected 4 `_`-separated fields, found {found}")]
    FieldCount { stem: String, found: usize },

    /// A field did not parse as an unsigned integer.
    #[error("`{stem}`: {field} field is not an unsigned integer")]
    Field {
        stem: String,
        field: &'static str,
        source: ParseIntError,
    },

    /// The gender index is outside the label set (0..2).
    #[error("`{stem}`: gender index {index} is outside the label set (0..2)")]
    GenderIndex { stem: String, index: usize },

    /// The ethnicity index is outside the label set (0..5).
    #[error("`{stem}`: ethnicity index {index} is outside the label set (0..5)")]
    EthnicityIndex { stem: String, index: usize },
}

/// Decode a filename stem into a [`FaceRecord`].
pub fn decode_stem(stem: &str) -> Result<FaceRecord, DecodeError> {
    let fields: Vec<&str> = stem.split('_').collect();
    if fields.len() != 4 {
        return Err(DecodeError::FieldCount {
            stem: stem.to_owned(),
            found: fields.len(),
        });
    }

    let age: u32 = parse_field(stem, "age", fields[0])?;
    let gender_index: usize = parse_field(stem, "gender", fields[1])?;
    let ethnicity_index: usize = parse_field(stem, "ethnicity", fields[2])?;
    let timestamp: u64 = parse_field(stem, "timestamp", fields[3])?;

    let gender = Gender::from_index(gender_index).ok_or_else(|| DecodeError::GenderIndex {
        stem: stem.to_owned(),
        index: gender_index,
    })?;
    let ethnicity =
        Ethnicity::from_index(ethnicity_index).ok_or_else(|| DecodeError::EthnicityIndex {
            stem: stem.to_owned(),
            index: ethnicity_index,
        })?;

    Ok(FaceRecord {
        age,
        gender,
        ethnicity,
        timestamp,
    })
}

/// Parse one stem field as an unsigned integer of the caller's width.
fn parse_field<T>(stem: &str, field: &'static str, raw: &str) -> Result<T, DecodeError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    raw.parse().map_err(|source| DecodeError::Field {
        stem: stem.to_owned(),
        field,
        source,
    })
}

/// Decode a dataset file path — strips the extension, then decodes the stem.
pub fn decode_path(path: &Path) -> Result<FaceRecord, DecodeError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| DecodeError::Stem {
            path: path.to_path_buf(),
        })?;
    decode_stem(stem)
}
