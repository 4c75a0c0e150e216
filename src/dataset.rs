//! Evaluation artifacts for the student-dropout study
//!
//! All numbers here were produced offline by the study's XGBoost run and are
//! carried as constants. Nothing in the crate recomputes them.

use serde::{Deserialize, Serialize};

/// Target classes, in the order used by every chart
pub const CLASS_LABELS: [&str; 3] = ["Отчислен", "Выпустился", "Обучается"];

/// Students per target class, aligned with [`CLASS_LABELS`]
pub const CLASS_COUNTS: [u64; 3] = [794, 2209, 1421];

/// Rows are the true class, columns the predicted class
pub const CONFUSION_MATRIX: [[u64; 3]; 3] = [[42, 39, 274], [29, 511, 12], [81, 68, 50]];

pub const MODEL_NAME: &str = "XGBoost";

pub const MODEL_METRICS: ModelMetrics = ModelMetrics {
    accuracy: 0.78,
    recall: 0.40,
    precision: 0.81,
    f1: 0.70,
};

/// Feature importances in the order the study reported them
pub const FEATURE_IMPORTANCES: [(&str, f64); 15] = [
    ("Дисциплины 2 сем (сдано)", 0.191129),
    ("Оплата обучения актуальна", 0.086025),
    ("Дисциплины 1 сем (зачислено)", 0.044757),
    ("Дисциплины 1 сем (сдано)", 0.040146),
    ("Дисциплины 1 сем (оценки)", 0.033854),
    ("Стипендиат", 0.030744),
    ("Дисциплины 2 сем (зачислено)", 0.030717),
    ("Должник", 0.030699),
    ("Дисциплины 2 сем (оценки)", 0.026809),
    ("Направление подготовки", 0.023268),
    ("Возраст при поступлении", 0.022266),
    ("Дисциплины 2 сем (сред. балл)", 0.021778),
    ("Возраст 25-30 лет", 0.021505),
    ("Форма обучения", 0.021502),
    ("Профессия матери", 0.020989),
];

pub const DATASET_DESCRIPTION: [&str; 2] = [
    "Набор данных содержит информацию о студентах, собранную для анализа \
     успеваемости и факторов, влияющих на отчисление. В данных представлены \
     демографические характеристики,",
    "детали поступления, академические показатели и социально-экономический \
     контекст. Переменная Target показывает текущий статус студента: \
     обучается, выпустился или отчислен.",
];

/// A feature and how much the model relied on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceEntry {
    pub name: String,
    pub importance: f64,
}

impl ImportanceEntry {
    pub fn new(name: impl Into<String>, importance: f64) -> Self {
        Self {
            name: name.into(),
            importance,
        }
    }
}

/// Number of students in one target class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class_label: String,
    pub count: u64,
}

/// Square confusion matrix with its class labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub labels: Vec<String>,
    /// `cells[true][predicted]`
    pub cells: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// Correctly classified samples (the diagonal)
    pub fn correct(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, row)| row.get(i))
            .sum()
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }
}

/// Headline scores of the evaluated model, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub recall: f64,
    pub precision: f64,
    pub f1: f64,
}

/// Everything the dashboard shows about one study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDataset {
    pub model_name: String,
    pub description: Vec<String>,
    pub class_distribution: Vec<ClassCount>,
    pub feature_importances: Vec<ImportanceEntry>,
    pub confusion_matrix: ConfusionMatrix,
    pub metrics: ModelMetrics,
}

impl StudyDataset {
    /// The built-in student-dropout study
    pub fn student_dropout() -> Self {
        let labels: Vec<String> = CLASS_LABELS.iter().map(|l| l.to_string()).collect();

        Self {
            model_name: MODEL_NAME.to_string(),
            description: DATASET_DESCRIPTION.iter().map(|p| p.to_string()).collect(),
            class_distribution: labels
                .iter()
                .zip(CLASS_COUNTS)
                .map(|(label, count)| ClassCount {
                    class_label: label.clone(),
                    count,
                })
                .collect(),
            feature_importances: FEATURE_IMPORTANCES
                .iter()
                .map(|&(name, importance)| ImportanceEntry::new(name, importance))
                .collect(),
            confusion_matrix: ConfusionMatrix {
                labels,
                cells: CONFUSION_MATRIX.iter().map(|row| row.to_vec()).collect(),
            },
            metrics: MODEL_METRICS,
        }
    }

    pub fn total_students(&self) -> u64 {
        self.class_distribution.iter().map(|c| c.count).sum()
    }
}

impl Default for StudyDataset {
    fn default() -> Self {
        Self::student_dropout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_dropout_shape() {
        let study = StudyDataset::student_dropout();
        assert_eq!(study.class_distribution.len(), 3);
        assert_eq!(study.feature_importances.len(), 15);
        assert_eq!(study.confusion_matrix.labels.len(), 3);
        assert!(study.confusion_matrix.cells.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_class_order_matches_labels() {
        let study = StudyDataset::student_dropout();
        assert_eq!(study.class_distribution[0].class_label, "Отчислен");
        assert_eq!(study.class_distribution[1].count, 2209);
        assert_eq!(study.total_students(), 4424);
    }

    #[test]
    fn test_confusion_matrix_totals() {
        let study = StudyDataset::student_dropout();
        assert_eq!(study.confusion_matrix.correct(), 42 + 511 + 50);
        assert_eq!(study.confusion_matrix.total(), 1106);
    }

    #[test]
    fn test_metrics_in_unit_range() {
        let m = MODEL_METRICS;
        for v in [m.accuracy, m.recall, m.precision, m.f1] {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_importances_non_negative() {
        assert!(FEATURE_IMPORTANCES.iter().all(|(_, v)| *v >= 0.0));
    }
}
