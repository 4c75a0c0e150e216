//! # dropout-dashboard - Student Dropout Evaluation Dashboard
//!
//! Presents the evaluation results of a student-dropout classifier: how the
//! three target classes are distributed, which features the model relied on,
//! the confusion matrix, and the headline scores.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the dashboard in the browser
//! dropout-dashboard --web
//!
//! # Print the full text report
//! dropout-dashboard
//!
//! # Dump the chart descriptors as JSON
//! dropout-dashboard --json -o dashboard.json
//! ```
//!
//! ## Feature Ranking
//!
//! The importance chart shows the `top_k` most important features, smallest
//! first, so a horizontal bar chart puts the strongest feature on top.
//! Features with equal importance keep their original order.

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod logging;
pub mod ranker;
pub mod report;
pub mod web;

pub use config::{
    ChartDimensions, ConfigError, DashboardConfig, RankingConfig, ServerSection, ThemeConfig,
    load_config,
};
pub use dashboard::{
    BarChart, Dashboard, Heatmap, MetricCard, MetricsPanel, PageInfo, PieChart, PieSlice,
    build_dashboard,
};
pub use dataset::{ClassCount, ConfusionMatrix, ImportanceEntry, ModelMetrics, StudyDataset};
pub use ranker::{DEFAULT_TOP_K, RankError, rank_top_features};
pub use report::{generate_json, generate_report, generate_summary};
