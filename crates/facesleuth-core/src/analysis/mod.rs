/// Analysis modules — post-scan aggregation of decoded records.

pub mod tally;

pub use tally::{tally_records, AgeBucket, DatasetTally, EthnicityBucket, GenderBucket};
