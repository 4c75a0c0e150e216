//! Terminal output for the dashboard
//!
//! Renders the same descriptors the web host receives as plain text or JSON.

use std::io::{self, Write};

use crate::dashboard::{BarChart, Dashboard, Heatmap};

const BAR_WIDTH: usize = 30;

/// Generate a short summary to the given writer
pub fn generate_summary<W: Write>(dashboard: &Dashboard, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", dashboard.page.heading)?;
    writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;

    let cards: Vec<String> = dashboard
        .metrics
        .cards
        .iter()
        .map(|c| format!("{}: {}", c.label, c.display))
        .collect();
    writeln!(writer, "{}", cards.join(" | "))?;

    let top = dashboard
        .feature_importance
        .entries
        .last()
        .map(|e| e.name.as_str())
        .unwrap_or("-");
    writeln!(writer, "Самый важный признак: {}", top)?;

    Ok(())
}

/// Generate the full text report with every panel
pub fn generate_report<W: Write>(dashboard: &Dashboard, writer: &mut W) -> io::Result<()> {
    let page = &dashboard.page;

    writeln!(writer, "# {}", page.heading)?;
    writeln!(writer)?;
    writeln!(writer, "## {}", page.description_header)?;
    writeln!(writer)?;
    writeln!(writer, "{}", page.description.join(" "))?;
    writeln!(writer)?;

    let pie = &dashboard.class_distribution;
    writeln!(writer, "## {}", pie.title)?;
    writeln!(writer)?;
    for slice in &pie.slices {
        writeln!(
            writer,
            "- {:<12} {:>6} ({:.1}%)",
            slice.label, slice.count, slice.percent
        )?;
    }
    writeln!(writer)?;

    write_bar_chart(&dashboard.feature_importance, writer)?;
    write_heatmap(&dashboard.confusion_matrix, writer)?;

    writeln!(writer, "## {}", dashboard.metrics.header)?;
    writeln!(writer)?;
    for card in &dashboard.metrics.cards {
        writeln!(writer, "- {}: {}  ({})", card.label, card.display, card.help)?;
    }

    Ok(())
}

/// Write the descriptor tree as pretty-printed JSON
pub fn generate_json<W: Write>(dashboard: &Dashboard, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, dashboard)?;
    writeln!(writer)
}

fn write_bar_chart<W: Write>(chart: &BarChart, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "## {}", chart.title)?;
    writeln!(writer)?;

    let name_width = chart
        .entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);
    let [lo, hi] = chart.axis_range;
    let span = (hi - lo).max(f64::EPSILON);

    // Largest first reads better in a terminal
    for entry in chart.entries.iter().rev() {
        let filled = (((entry.importance - lo) / span).clamp(0.0, 1.0) * BAR_WIDTH as f64)
            .round() as usize;
        let padding = name_width - entry.name.chars().count();
        writeln!(
            writer,
            "{}{} {:<bar$} {:.6}",
            entry.name,
            " ".repeat(padding),
            "█".repeat(filled),
            entry.importance,
            bar = BAR_WIDTH
        )?;
    }
    writeln!(writer)
}

fn write_heatmap<W: Write>(heatmap: &Heatmap, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "## {}", heatmap.title)?;
    writeln!(writer)?;
    writeln!(writer, "{} \\ {}", heatmap.y_title, heatmap.x_title)?;

    write!(writer, "| |")?;
    for label in &heatmap.x_labels {
        write!(writer, " {} |", label)?;
    }
    writeln!(writer)?;
    write!(writer, "|---|")?;
    for _ in &heatmap.x_labels {
        write!(writer, "---:|")?;
    }
    writeln!(writer)?;

    for (label, row) in heatmap.y_labels.iter().zip(&heatmap.annotations) {
        write!(writer, "| {} |", label)?;
        for cell in row {
            write!(writer, " {} |", cell)?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard::build_dashboard;
    use crate::dataset::StudyDataset;

    fn render<F>(f: F) -> String
    where
        F: Fn(&Dashboard, &mut Vec<u8>) -> io::Result<()>,
    {
        let dashboard = build_dashboard(
            &StudyDataset::student_dropout(),
            &DashboardConfig::default(),
        )
        .unwrap();
        let mut out = Vec::new();
        f(&dashboard, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_lists_metrics() {
        let out = render(|d, w| generate_summary(d, w));
        assert!(out.starts_with("StudentsDropout"));
        assert!(out.contains("Accuracy (Точность): 0.78"));
        assert!(out.contains("Самый важный признак: Дисциплины 2 сем (сдано)"));
    }

    #[test]
    fn test_report_has_all_panels() {
        let out = render(|d, w| generate_report(d, w));
        assert!(out.contains("## Распределение классов"));
        assert!(out.contains("## Топ 10 важных признаков"));
        assert!(out.contains("## Матрица ошибок"));
        assert!(out.contains("## Результаты модели XGBoost"));
        assert!(out.contains("| Выпустился | 29 | 511 | 12 |"));
    }

    #[test]
    fn test_report_bars_largest_first() {
        let out = render(|d, w| generate_report(d, w));
        let first = out.find("Дисциплины 2 сем (сдано)").unwrap();
        let last = out.find("Направление подготовки").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_json_is_valid() {
        let out = render(|d, w| generate_json(d, w));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["page"]["heading"], "StudentsDropout");
    }
}
