/// Label sets encoded in dataset filenames.
///
/// Filenames address both sets *by position*: `0_` means `Gender::Male`,
/// `_2_` means `Ethnicity::Mongoloid`. The declaration order of the enum
/// variants IS the wire format, so it must never be reordered.
use std::ops::RangeInclusive;

/// Lowest age pre-seeded in the aggregation tables.
pub const AGE_SEED_MIN: u32 = 1;

/// Highest age pre-seeded in the aggregation tables.
///
/// Records older than this are still counted — their buckets are created
/// lazily — but consumers may index 1–116 without existence checks.
pub const AGE_SEED_MAX: u32 = 116;

/// Default age domain for the per-age charts.
pub const DEFAULT_AGE_RANGE: RangeInclusive<u32> = 1..=80;

/// Gender label set. Filename index 0 = Male, 1 = Female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All genders in filename-index order.
    pub const ALL: [Gender; 2] = [Self::Male, Self::Female];

    /// Number of gender labels.
    pub const COUNT: usize = Self::ALL.len();

    /// Positional lookup from a filename index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The filename index of this label (inverse of [`from_index`]).
    ///
    /// [`from_index`]: Self::from_index
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Ethnicity label set. Filename indices 0–4 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ethnicity {
    Caucasoid,
    Negroid,
    Mongoloid,
    Australoid,
    Others,
}

impl Ethnicity {
    /// All ethnicities in filename-index order.
    pub const ALL: [Ethnicity; 5] = [
        Self::Caucasoid,
        Self::Negroid,
        Self::Mongoloid,
        Self::Australoid,
        Self::Others,
    ];

    /// Number of ethnicity labels.
    pub const COUNT: usize = Self::ALL.len();

    /// Positional lookup from a filename index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The filename index of this label (inverse of [`from_index`]).
    ///
    /// [`from_index`]: Self::from_index
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Caucasoid => "Caucasoid",
            Self::Negroid => "Negroid",
            Self::Mongoloid => "Mongoloid",
            Self::Australoid => "Australoid",
            Self::Others => "Others",
        }
    }
}
