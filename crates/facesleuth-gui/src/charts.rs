/// Chart composition — turns the finished tally into bar-chart models.
///
/// Each builder is pure with respect to its tally argument: it reads the
/// aggregate, never mutates it, and shares no chart state with the other
/// builders. Painting is a separate concern
/// (see [`widgets::bar_chart`](crate::widgets::bar_chart)), so these
/// functions can be tested without a window.
use std::ops::RangeInclusive;

use egui::Color32;
use facesleuth_core::analysis::DatasetTally;
use facesleuth_core::model::{Ethnicity, Gender};

use crate::theme::FaceSleuthTheme;

/// How the series of a chart share each category position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarLayout {
    /// Series drawn side by side within each category.
    Grouped,
    /// Series drawn on top of each other; each segment's base is the
    /// running sum of the segments below it, in series order.
    Stacked,
}

/// One legend entry and its per-category values.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: &'static str,
    pub color: Color32,
    /// One value per chart category, in category order.
    pub values: Vec<u64>,
}

/// A composed bar chart, ready to paint.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub y_label: &'static str,
    pub x_label: Option<&'static str>,
    /// Category (x-axis tick) labels, in drawing order.
    pub categories: Vec<String>,
    /// Legend series, in drawing/stacking order.
    pub series: Vec<BarSeries>,
    pub layout: BarLayout,
    /// Print each bar's value above it (grouped layout only).
    pub value_labels: bool,
}

impl BarChart {
    /// Total of one category column across all series.
    pub fn column_total(&self, category: usize) -> u64 {
        self.series.iter().map(|s| s.values[category]).sum()
    }

    /// The value the y-axis must reach: the tallest bar (grouped) or the
    /// tallest stack (stacked).
    pub fn max_value(&self) -> u64 {
        match self.layout {
            BarLayout::Grouped => self
                .series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .max()
                .unwrap_or(0),
            BarLayout::Stacked => (0..self.categories.len())
                .map(|c| self.column_total(c))
                .max()
                .unwrap_or(0),
        }
    }
}

/// Grouped chart: per ethnicity, one bar per gender, with numeric labels
/// above each bar.
pub fn genders_by_ethnicity(tally: &DatasetTally, theme: &FaceSleuthTheme) -> BarChart {
    let categories = Ethnicity::ALL.iter().map(|e| e.label().to_owned()).collect();
    let series = Gender::ALL
        .iter()
        .map(|&gender| BarSeries {
            name: gender.label(),
            color: theme.gender_color(gender),
            values: Ethnicity::ALL
                .iter()
                .map(|&e| tally.ethnicity_bucket(e).gender[gender.index()])
                .collect(),
        })
        .collect();

    BarChart {
        title: "Number of pictures by ethnicity and gender".to_owned(),
        y_label: "Number of pictures",
        x_label: None,
        categories,
        series,
        layout: BarLayout::Grouped,
        value_labels: true,
    }
}

/// Stacked chart over an age range: one bar per age, segmented by
/// ethnicity in fixed label order.
pub fn ethnicity_by_age(
    tally: &DatasetTally,
    ages: RangeInclusive<u32>,
    theme: &FaceSleuthTheme,
) -> BarChart {
    let categories = ages.clone().map(|age| age.to_string()).collect();
    let series = Ethnicity::ALL
        .iter()
        .map(|&ethnicity| BarSeries {
            name: ethnicity.label(),
            color: theme.ethnicity_color(ethnicity),
            values: ages
                .clone()
                .map(|age| tally.age_bucket(age).ethnicity[ethnicity.index()])
                .collect(),
        })
        .collect();

    BarChart {
        title: format!(
            "Number of pictures per age (from {} to {}) and ethnicity",
            ages.start(),
            ages.end()
        ),
        y_label: "Number of pictures",
        x_label: Some("Age"),
        categories,
        series,
        layout: BarLayout::Stacked,
        value_labels: false,
    }
}

/// Stacked chart over an age range: one bar per age, segmented by gender
/// in fixed label order.
pub fn gender_by_age(
    tally: &DatasetTally,
    ages: RangeInclusive<u32>,
    theme: &FaceSleuthTheme,
) -> BarChart {
    let categories = ages.clone().map(|age| age.to_string()).collect();
    let series = Gender::ALL
        .iter()
        .map(|&gender| BarSeries {
            name: gender.label(),
            color: theme.gender_color(gender),
            values: ages
                .clone()
                .map(|age| tally.age_bucket(age).gender[gender.index()])
                .collect(),
        })
        .collect();

    BarChart {
        title: format!(
            "Number of pictures per age (from {} to {}) and gender",
            ages.start(),
            ages.end()
        ),
        y_label: "Number of pictures",
        x_label: Some("Age"),
        categories,
        series,
        layout: BarLayout::Stacked,
        value_labels: false,
    }
}

/// Stacked chart with exactly two category positions (one per gender),
/// segmented by ethnicity.
pub fn ethnicity_by_gender(tally: &DatasetTally, theme: &FaceSleuthTheme) -> BarChart {
    let categories = Gender::ALL.iter().map(|g| g.label().to_owned()).collect();
    let series = Ethnicity::ALL
        .iter()
        .map(|&ethnicity| BarSeries {
            name: ethnicity.label(),
            color: theme.ethnicity_color(ethnicity),
            values: Gender::ALL
                .iter()
                .map(|&g| tally.gender_bucket(g).ethnicity[ethnicity.index()])
                .collect(),
        })
        .collect();

    BarChart {
        title: "Number of pictures per gender and ethnicity".to_owned(),
        y_label: "Number of pictures",
        x_label: None,
        categories,
        series,
        layout: BarLayout::Stacked,
        value_labels: false,
    }
}
