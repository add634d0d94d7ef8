/// A single decoded dataset entry.
use crate::model::labels::{Ethnicity, Gender};

/// One face image's metadata, decoded from its filename stem
/// `<age>_<genderIndex>_<ethnicityIndex>_<timestamp>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRecord {
    /// Age in years. Non-negative, no enforced upper bound.
    pub age: u32,
    pub gender: Gender,
    pub ethnicity: Ethnicity,
    /// Capture timestamp exactly as encoded in the filename
    /// (`yyyymmddHHMMSSFFF` in the reference dataset). Carried verbatim;
    /// never interpreted by the aggregation.
    pub timestamp: u64,
}

impl FaceRecord {
    /// Re-encode this record as a filename stem.
    ///
    /// Exact inverse of [`decode_stem`](crate::decode::decode_stem):
    /// for any valid stem, `decode_stem(s)?.stem() == s` (modulo leading
    /// zeros, which the dataset convention does not use).
    pub fn stem(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.age,
            self.gender.index(),
            self.ethnicity.index(),
            self.timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_encodes_label_indices() {
        let record = FaceRecord {
            age: 25,
            gender: Gender::Female,
            ethnicity: Ethnicity::Mongoloid,
            timestamp: 20170109150557335,
        };
        assert_eq!(record.stem(), "25_1_2_20170109150557335");
    }
}
