//! Chart description shared by all renderers.

/// Chart series style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Continuous line with a dot per point
    Line,
    /// One bar per category
    Bar,
}

/// One category on the x-axis and its count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: i64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Everything a renderer needs to draw one chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Series name shown in the legend and tooltips
    pub series_name: &'static str,
    /// CSS color of the series
    pub color: &'static str,
    /// Points in x-axis order
    pub points: Vec<ChartPoint>,
    /// Label every x category instead of thinning crowded labels
    pub label_every_category: bool,
    pub show_legend: bool,
}

impl ChartSpec {
    /// Largest value in the series, or 0 when empty
    pub fn max_value(&self) -> i64 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0).max(0)
    }

    /// Indices of the x categories that get a tick label.
    ///
    /// Every category when `label_every_category` is set, otherwise every
    /// n-th one so that at most `max_labels` are shown.
    pub fn labelled_indices(&self, max_labels: usize) -> Vec<usize> {
        let count = self.points.len();
        if self.label_every_category || count <= max_labels.max(1) {
            return (0..count).collect();
        }

        let step = count.div_ceil(max_labels.max(1));
        (0..count).step_by(step).collect()
    }
}
