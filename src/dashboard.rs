//! Chart and metric descriptors for the rendering host
//!
//! Converts a [`StudyDataset`] into a JSON-serializable tree that a host can
//! draw without knowing anything about the study: one pie chart, one
//! horizontal bar chart, one annotated heatmap and a row of metric cards.

use serde::Serialize;

use crate::config::{ChartDimensions, DashboardConfig, ThemeConfig};
use crate::dataset::{ImportanceEntry, StudyDataset};
use crate::ranker::{RankError, rank_top_features};

/// Slice colors for the class-distribution pie, in class order
pub const PIE_COLORS: [&str; 3] = ["#8B0000", "#CD5C5C", "#FF6347"];

/// Low and high ends of the importance color scale
pub const BAR_COLOR_SCALE: [&str; 2] = ["#FFC0CB", "#8B0000"];

/// Fixed x range of the importance chart
pub const IMPORTANCE_AXIS_RANGE: [f64; 2] = [0.0, 0.2];

/// Complete dashboard for one study
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub page: PageInfo,
    pub theme: ThemeConfig,
    pub class_distribution: PieChart,
    pub feature_importance: BarChart,
    pub confusion_matrix: Heatmap,
    pub metrics: MetricsPanel,
}

/// Page chrome: titles and the dataset description
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub page_title: String,
    pub heading: String,
    pub layout: String,
    pub description_header: String,
    pub description: Vec<String>,
}

/// Chart margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
    pub top: u32,
    pub pad: u32,
}

impl Margins {
    const fn uniform(side: u32) -> Self {
        Self {
            left: side,
            right: side,
            bottom: side,
            top: side,
            pad: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    pub colors: Vec<String>,
    /// Fraction of the radius cut out of the middle
    pub hole: f64,
    pub dimensions: ChartDimensions,
    pub margins: Margins,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: u64,
    /// Share of the total, in percent, rounded to one decimal
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub title: String,
    pub subtitle: String,
    pub value_label: String,
    pub orientation: String,
    /// Bars in drawing order: smallest first
    pub entries: Vec<ImportanceEntry>,
    pub color_scale: Vec<String>,
    pub axis_range: [f64; 2],
    pub dimensions: ChartDimensions,
    pub margins: Margins,
}

#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub title: String,
    /// Predicted classes
    pub x_labels: Vec<String>,
    /// True classes
    pub y_labels: Vec<String>,
    pub x_title: String,
    pub y_title: String,
    pub z: Vec<Vec<u64>>,
    pub annotations: Vec<Vec<String>>,
    pub color_scale: Vec<ColorStop>,
    pub show_scale: bool,
    pub dimensions: ChartDimensions,
    pub margins: Margins,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsPanel {
    pub header: String,
    pub cards: Vec<MetricCard>,
}

/// One headline number
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: f64,
    /// `value` with two decimals, as shown on the card
    pub display: String,
    pub help: String,
}

impl MetricCard {
    fn new(label: &str, value: f64, help: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            display: format!("{:.2}", value),
            help: help.to_string(),
        }
    }
}

/// Build the dashboard for `study` using the presentation settings in `config`
///
/// # Errors
///
/// Propagates [`RankError`] when the importance chart cannot be ranked.
pub fn build_dashboard(
    study: &StudyDataset,
    config: &DashboardConfig,
) -> Result<Dashboard, RankError> {
    let dimensions = config.theme.chart_dimensions;
    let top_k = config.ranking.top_k;

    Ok(Dashboard {
        page: page_info(study),
        theme: config.theme.clone(),
        class_distribution: pie_chart(study, dimensions),
        feature_importance: bar_chart(study, top_k, dimensions)?,
        confusion_matrix: heatmap(study, dimensions),
        metrics: metrics_panel(study),
    })
}

fn page_info(study: &StudyDataset) -> PageInfo {
    PageInfo {
        page_title: "Дашборд классификации студентов".to_string(),
        heading: "StudentsDropout".to_string(),
        layout: "wide".to_string(),
        description_header: "Описание набора данных".to_string(),
        description: study.description.clone(),
    }
}

fn pie_chart(study: &StudyDataset, dimensions: ChartDimensions) -> PieChart {
    let total = study.total_students();

    let slices = study
        .class_distribution
        .iter()
        .map(|class| PieSlice {
            label: class.class_label.clone(),
            count: class.count,
            percent: percent_of(class.count, total),
        })
        .collect();

    PieChart {
        title: "Распределение классов".to_string(),
        slices,
        colors: PIE_COLORS.iter().map(|c| c.to_string()).collect(),
        hole: 0.3,
        dimensions,
        margins: Margins::uniform(50),
    }
}

fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}

fn bar_chart(
    study: &StudyDataset,
    top_k: usize,
    dimensions: ChartDimensions,
) -> Result<BarChart, RankError> {
    let entries = rank_top_features(&study.feature_importances, top_k)?;
    tracing::debug!(
        requested = top_k,
        shown = entries.len(),
        "ranked feature importances"
    );

    Ok(BarChart {
        title: format!("Топ {} важных признаков", top_k),
        subtitle: format!("Топ-{} значимых факторов", top_k),
        value_label: "Значимость".to_string(),
        orientation: "h".to_string(),
        entries,
        color_scale: BAR_COLOR_SCALE.iter().map(|c| c.to_string()).collect(),
        axis_range: IMPORTANCE_AXIS_RANGE,
        dimensions,
        // Long feature names need room on the left
        margins: Margins {
            left: 120,
            right: 20,
            bottom: 50,
            top: 80,
            pad: 4,
        },
    })
}

fn heatmap(study: &StudyDataset, dimensions: ChartDimensions) -> Heatmap {
    let matrix = &study.confusion_matrix;

    let annotations = matrix
        .cells
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let color_scale = [(0.0, "#FFC0CB"), (0.5, "#CD5C5C"), (1.0, "#8B0000")]
        .into_iter()
        .map(|(position, color)| ColorStop {
            position,
            color: color.to_string(),
        })
        .collect();

    Heatmap {
        title: "Матрица ошибок".to_string(),
        x_labels: matrix.labels.clone(),
        y_labels: matrix.labels.clone(),
        x_title: "Предсказанные классы".to_string(),
        y_title: "Истинные классы".to_string(),
        z: matrix.cells.clone(),
        annotations,
        color_scale,
        show_scale: true,
        dimensions,
        margins: Margins::uniform(50),
    }
}

fn metrics_panel(study: &StudyDataset) -> MetricsPanel {
    let m = &study.metrics;

    MetricsPanel {
        header: format!("Результаты модели {}", study.model_name),
        cards: vec![
            MetricCard::new("Accuracy (Точность)", m.accuracy, "Общая точность модели"),
            MetricCard::new(
                "Recall (Полнота)",
                m.recall,
                "Доля правильно предсказанных отчислений",
            ),
            MetricCard::new(
                "Precision (Точность)",
                m.precision,
                "Точность предсказаний выпускников",
            ),
            MetricCard::new(
                "F1-score (F-мера)",
                m.f1,
                "Среднее гармоническое precision и recall",
            ),
        ],
    }
}
