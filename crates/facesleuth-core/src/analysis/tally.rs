/// Cross-tabulated label aggregation — the core of FaceSleuth.
///
/// One linear pass over the decoded records produces three views of the
/// same data: counts keyed by age, by gender, and by ethnicity, each
/// holding sub-counts along the other dimensions plus a total. Every
/// record contributes exactly one increment per view, so the three grand
/// totals always agree with each other and with the record count.
///
/// Ages [`AGE_SEED_MIN`]..=[`AGE_SEED_MAX`] are pre-seeded with zero
/// counts in every age table, and every Gender/Ethnicity slot exists from
/// construction, so consumers can index the full seeded domain without
/// existence checks. Ages outside the seeded range get their entries
/// lazily when a record carries them.
use std::collections::BTreeMap;

use crate::model::labels::{Ethnicity, Gender, AGE_SEED_MAX, AGE_SEED_MIN};
use crate::model::record::FaceRecord;

/// Counts for one age value, split by the other two dimensions.
///
/// Invariant: `total == gender.iter().sum() == ethnicity.iter().sum()`,
/// because each record increments exactly one slot of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBucket {
    /// Count per gender, indexed by [`Gender::index`].
    pub gender: [u64; Gender::COUNT],
    /// Count per ethnicity, indexed by [`Ethnicity::index`].
    pub ethnicity: [u64; Ethnicity::COUNT],
    pub total: u64,
}

impl AgeBucket {
    /// The all-zero bucket. Returned for ages nothing was recorded at.
    pub const ZERO: AgeBucket = AgeBucket {
        gender: [0; Gender::COUNT],
        ethnicity: [0; Ethnicity::COUNT],
        total: 0,
    };

    fn add(&mut self, record: &FaceRecord) {
        self.gender[record.gender.index()] += 1;
        self.ethnicity[record.ethnicity.index()] += 1;
        self.total += 1;
    }
}

/// Counts for one gender, split by age and ethnicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderBucket {
    /// Count per age. Ages 1–116 are pre-seeded at zero.
    pub age: BTreeMap<u32, u64>,
    /// Count per ethnicity, indexed by [`Ethnicity::index`].
    pub ethnicity: [u64; Ethnicity::COUNT],
    pub total: u64,
}

impl GenderBucket {
    fn new() -> Self {
        Self {
            age: seeded_age_table(),
            ethnicity: [0; Ethnicity::COUNT],
            total: 0,
        }
    }

    /// Count at a single age; zero for ages nothing was recorded at.
    pub fn count_at_age(&self, age: u32) -> u64 {
        self.age.get(&age).copied().unwrap_or(0)
    }

    fn add(&mut self, record: &FaceRecord) {
        *self.age.entry(record.age).or_insert(0) += 1;
        self.ethnicity[record.ethnicity.index()] += 1;
        self.total += 1;
    }
}

/// Counts for one ethnicity, split by age and gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthnicityBucket {
    /// Count per age. Ages 1–116 are pre-seeded at zero.
    pub age: BTreeMap<u32, u64>,
    /// Count per gender, indexed by [`Gender::index`].
    pub gender: [u64; Gender::COUNT],
    pub total: u64,
}

impl EthnicityBucket {
    fn new() -> Self {
        Self {
            age: seeded_age_table(),
            gender: [0; Gender::COUNT],
            total: 0,
        }
    }

    /// Count at a single age; zero for ages nothing was recorded at.
    pub fn count_at_age(&self, age: u32) -> u64 {
        self.age.get(&age).copied().unwrap_or(0)
    }

    fn add(&mut self, record: &FaceRecord) {
        *self.age.entry(record.age).or_insert(0) += 1;
        self.gender[record.gender.index()] += 1;
        self.total += 1;
    }
}

/// The three cross-tabulations, built once and then read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetTally {
    /// Per-age buckets. Ages 1–116 always present; others lazily added.
    pub by_age: BTreeMap<u32, AgeBucket>,
    /// Per-gender buckets, indexed by [`Gender::index`].
    pub by_gender: [GenderBucket; Gender::COUNT],
    /// Per-ethnicity buckets, indexed by [`Ethnicity::index`].
    pub by_ethnicity: [EthnicityBucket; Ethnicity::COUNT],
    /// Number of records folded in.
    pub record_count: u64,
}

impl DatasetTally {
    /// An empty tally with every seeded bucket at zero.
    pub fn new() -> Self {
        let by_age = (AGE_SEED_MIN..=AGE_SEED_MAX)
            .map(|age| (age, AgeBucket::ZERO))
            .collect();
        Self {
            by_age,
            by_gender: std::array::from_fn(|_| GenderBucket::new()),
            by_ethnicity: std::array::from_fn(|_| EthnicityBucket::new()),
            record_count: 0,
        }
    }

    /// The bucket for `age`, or the zero bucket if nothing was recorded
    /// there. Total over all ages, so chart code never needs an
    /// existence check.
    pub fn age_bucket(&self, age: u32) -> &AgeBucket {
        self.by_age.get(&age).unwrap_or(&AgeBucket::ZERO)
    }

    /// The bucket for one gender.
    pub fn gender_bucket(&self, gender: Gender) -> &GenderBucket {
        &self.by_gender[gender.index()]
    }

    /// The bucket for one ethnicity.
    pub fn ethnicity_bucket(&self, ethnicity: Ethnicity) -> &EthnicityBucket {
        &self.by_ethnicity[ethnicity.index()]
    }

    /// Fold one record into all three views.
    fn add(&mut self, record: &FaceRecord) {
        self.by_age
            .entry(record.age)
            .or_insert(AgeBucket::ZERO)
            .add(record);
        self.by_gender[record.gender.index()].add(record);
        self.by_ethnicity[record.ethnicity.index()].add(record);
        self.record_count += 1;
    }
}

impl Default for DatasetTally {
    fn default() -> Self {
        Self::new()
    }
}

/// Cross-tabulate a record list.
///
/// Single linear pass, order-independent: each record is a constant-time
/// lookup-and-increment in each of the three views.
pub fn tally_records(records: &[FaceRecord]) -> DatasetTally {
    let mut tally = DatasetTally::new();
    for record in records {
        tally.add(record);
    }
    tally
}

/// Zero-filled age table covering the seeded range.
fn seeded_age_table() -> BTreeMap<u32, u64> {
    (AGE_SEED_MIN..=AGE_SEED_MAX).map(|age| (age, 0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(age: u32, gender: usize, ethnicity: usize, timestamp: u64) -> FaceRecord {
        FaceRecord {
            age,
            gender: Gender::from_index(gender).unwrap(),
            ethnicity: Ethnicity::from_index(ethnicity).unwrap(),
            timestamp,
        }
    }

    /// Assert the per-bucket invariant on every bucket of a tally:
    /// each total equals the sum of each of its sub-count dimensions.
    fn assert_consistent(tally: &DatasetTally) {
        for (age, bucket) in &tally.by_age {
            let by_gender: u64 = bucket.gender.iter().sum();
            let by_ethnicity: u64 = bucket.ethnicity.iter().sum();
            assert_eq!(bucket.total, by_gender, "age {age} gender sum");
            assert_eq!(bucket.total, by_ethnicity, "age {age} ethnicity sum");
        }
        for gender in Gender::ALL {
            let bucket = tally.gender_bucket(gender);
            let by_age: u64 = bucket.age.values().sum();
            let by_ethnicity: u64 = bucket.ethnicity.iter().sum();
            assert_eq!(bucket.total, by_age, "{gender:?} age sum");
            assert_eq!(bucket.total, by_ethnicity, "{gender:?} ethnicity sum");
        }
        for ethnicity in Ethnicity::ALL {
            let bucket = tally.ethnicity_bucket(ethnicity);
            let by_age: u64 = bucket.age.values().sum();
            let by_gender: u64 = bucket.gender.iter().sum();
            assert_eq!(bucket.total, by_age, "{ethnicity:?} age sum");
            assert_eq!(bucket.total, by_gender, "{ethnicity:?} gender sum");
        }

        let age_total: u64 = tally.by_age.values().map(|b| b.total).sum();
        let gender_total: u64 = tally.by_gender.iter().map(|b| b.total).sum();
        let ethnicity_total: u64 = tally.by_ethnicity.iter().map(|b| b.total).sum();
        assert_eq!(age_total, tally.record_count);
        assert_eq!(gender_total, tally.record_count);
        assert_eq!(ethnicity_total, tally.record_count);
    }

    /// The worked example: two 25-year-old Mongoloid pictures (one of each
    /// gender) and one 30-year-old male Caucasoid picture.
    #[test]
    fn tallies_example_dataset() {
        let records = [
            record(25, 0, 2, 111),
            record(25, 1, 2, 222),
            record(30, 0, 0, 333),
        ];
        let tally = tally_records(&records);

        let at_25 = tally.age_bucket(25);
        assert_eq!(at_25.gender[Gender::Male.index()], 1);
        assert_eq!(at_25.gender[Gender::Female.index()], 1);
        assert_eq!(at_25.ethnicity[Ethnicity::Mongoloid.index()], 2);
        assert_eq!(at_25.total, 2);

        let at_30 = tally.age_bucket(30);
        assert_eq!(at_30.gender[Gender::Male.index()], 1);
        assert_eq!(at_30.ethnicity[Ethnicity::Caucasoid.index()], 1);
        assert_eq!(at_30.total, 1);

        assert_eq!(tally.ethnicity_bucket(Ethnicity::Mongoloid).total, 2);
        assert_eq!(tally.gender_bucket(Gender::Male).count_at_age(30), 1);
        assert_eq!(tally.record_count, 3);
        assert_consistent(&tally);
    }

    /// An empty record list still carries all-zero seeded buckets for
    /// ages 1–116 and every known label.
    #[test]
    fn empty_input_yields_seeded_zero_buckets() {
        let tally = tally_records(&[]);

        assert_eq!(tally.record_count, 0);
        assert_eq!(tally.by_age.len(), (AGE_SEED_MAX - AGE_SEED_MIN + 1) as usize);
        for age in AGE_SEED_MIN..=AGE_SEED_MAX {
            assert_eq!(tally.by_age.get(&age), Some(&AgeBucket::ZERO));
        }
        for gender in Gender::ALL {
            let bucket = tally.gender_bucket(gender);
            assert_eq!(bucket.total, 0);
            assert_eq!(bucket.age.len(), 116);
            assert!(bucket.age.values().all(|&c| c == 0));
        }
        for ethnicity in Ethnicity::ALL {
            assert_eq!(tally.ethnicity_bucket(ethnicity).total, 0);
        }
        assert_consistent(&tally);
    }

    /// Grand totals across all three views equal the record count.
    #[test]
    fn grand_totals_agree() {
        let records: Vec<FaceRecord> = (0..50)
            .map(|i| record(1 + i % 90, (i % 2) as usize, (i % 5) as usize, i as u64))
            .collect();
        let tally = tally_records(&records);
        assert_eq!(tally.record_count, 50);
        assert_consistent(&tally);
    }

    /// The result must not depend on processing order.
    #[test]
    fn order_independent() {
        let forward = [
            record(5, 0, 1, 1),
            record(5, 1, 1, 2),
            record(70, 0, 4, 3),
            record(116, 1, 0, 4),
        ];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(tally_records(&forward), tally_records(&reversed));
    }

    /// Running the aggregator twice over the same list yields identical
    /// counts (fresh structures each time).
    #[test]
    fn idempotent_across_runs() {
        let records = [record(25, 0, 2, 111), record(30, 1, 3, 222)];
        assert_eq!(tally_records(&records), tally_records(&records));
    }

    /// Ages outside the seeded 1–116 range get buckets lazily, in all
    /// three views.
    #[test]
    fn out_of_range_age_is_lazily_bucketed() {
        let records = [record(150, 1, 4, 1), record(0, 0, 0, 2)];
        let tally = tally_records(&records);

        assert_eq!(tally.age_bucket(150).total, 1);
        assert_eq!(tally.age_bucket(150).gender[Gender::Female.index()], 1);
        assert_eq!(tally.age_bucket(0).total, 1);
        assert_eq!(tally.gender_bucket(Gender::Female).count_at_age(150), 1);
        assert_eq!(tally.ethnicity_bucket(Ethnicity::Others).count_at_age(150), 1);

        // Seeded range plus the two lazy entries.
        assert_eq!(tally.by_age.len(), 118);
        assert_consistent(&tally);
    }

    /// Ages nothing was recorded at stay readable without existence checks.
    #[test]
    fn unrecorded_ages_read_as_zero() {
        let tally = tally_records(&[record(25, 0, 2, 1)]);
        assert_eq!(tally.age_bucket(80).total, 0);
        assert_eq!(tally.age_bucket(400), &AgeBucket::ZERO);
        assert_eq!(tally.gender_bucket(Gender::Male).count_at_age(400), 0);
    }
}
