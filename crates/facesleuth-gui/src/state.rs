/// Application state management.
///
/// Centralises all state that the UI reads and writes. The dataset is
/// analysed *before* the window opens, so unlike a live-scanning tool
/// there is no phase machine here: the tally arrives finished and is
/// read-only for the lifetime of the window. The only mutable state is
/// presentation — the chart age range and the theme.
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use facesleuth_core::analysis::DatasetTally;
use facesleuth_core::model::{AGE_SEED_MAX, AGE_SEED_MIN, DEFAULT_AGE_RANGE};

/// All application state.
pub struct AppState {
    // ── Dataset (read-only after construction) ─────────
    /// Directory the dataset was read from, for display.
    pub input_path: String,
    /// The finished cross-tabulation.
    pub tally: DatasetTally,
    /// Wall-clock time of the scan+decode+tally pipeline.
    pub analysis_duration: Duration,
    /// When the analysis finished.
    pub analysed_at: chrono::DateTime<chrono::Local>,

    // ── Chart controls ─────────────────────────────────
    /// Lower bound of the per-age charts (inclusive).
    pub age_from: u32,
    /// Upper bound of the per-age charts (inclusive).
    pub age_to: u32,

    // ── UI state ───────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    pub show_about: bool,
}

impl AppState {
    /// Create application state around a finished tally.
    pub fn new(input_path: &Path, tally: DatasetTally, analysis_duration: Duration) -> Self {
        Self {
            input_path: input_path.display().to_string(),
            tally,
            analysis_duration,
            analysed_at: chrono::Local::now(),
            age_from: *DEFAULT_AGE_RANGE.start(),
            age_to: *DEFAULT_AGE_RANGE.end(),
            dark_mode: true,
            show_about: false,
        }
    }

    /// The age domain for the per-age charts.
    ///
    /// Normalised so an inverted pair from the range controls still yields
    /// a valid inclusive range, clamped to the seeded age table.
    pub fn age_range(&self) -> RangeInclusive<u32> {
        let lo = self.age_from.clamp(AGE_SEED_MIN, AGE_SEED_MAX);
        let hi = self.age_to.clamp(AGE_SEED_MIN, AGE_SEED_MAX);
        lo.min(hi)..=lo.max(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facesleuth_core::analysis::tally_records;

    fn state() -> AppState {
        AppState::new(
            Path::new("/data/faces"),
            tally_records(&[]),
            Duration::from_millis(5),
        )
    }

    /// The default chart domain is ages 1–80 inclusive.
    #[test]
    fn default_age_range_is_1_to_80() {
        assert_eq!(state().age_range(), 1..=80);
    }

    /// An inverted from/to pair still yields a forward range.
    #[test]
    fn inverted_age_range_is_normalised() {
        let mut s = state();
        s.age_from = 60;
        s.age_to = 20;
        assert_eq!(s.age_range(), 20..=60);
    }

    /// Out-of-table bounds are clamped to the seeded 1–116 domain.
    #[test]
    fn age_range_is_clamped_to_seeded_domain() {
        let mut s = state();
        s.age_from = 0;
        s.age_to = 400;
        assert_eq!(s.age_range(), 1..=116);
    }
}
