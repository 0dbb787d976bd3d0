use ndarray::{Array1, ArrayView1};

use crate::features::FeatureRecord;

/// A single one-vs-one decision machine between two classes.
#[derive(Debug, Clone)]
pub(crate) struct Machine {
    pub(crate) positive: usize,
    pub(crate) negative: usize,
    pub(crate) weights: Array1<f32>,
    pub(crate) bias: f32,
}

impl Machine {
    fn decision(&self, x: ArrayView1<f32>) -> f32 {
        self.weights.dot(&x) + self.bias
    }
}

/// A pre-trained linear-kernel SVM over flower measurements.
///
/// Built once from the deserialized artifact and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct LinearSvm {
    classes: Vec<String>,
    machines: Vec<Machine>,
}

impl LinearSvm {
    pub(crate) fn new(classes: Vec<String>, machines: Vec<Machine>) -> Self {
        Self { classes, machines }
    }

    /// The class labels this model was trained on, in training order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Classifies one record into a species label.
    ///
    /// Every pairwise machine votes for one of its two classes; the class
    /// with the most votes wins, the lowest class index on a tie.
    pub fn predict(&self, record: &FeatureRecord) -> &str {
        let x = record.as_array();

        let mut votes = vec![0usize; self.classes.len()];
        for machine in &self.machines {
            let winner = if machine.decision(x.view()) > 0.0 {
                machine.positive
            } else {
                machine.negative
            };
            votes[winner] += 1;
        }

        let mut best = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > votes[best] {
                best = class;
            }
        }

        &self.classes[best]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iris_model() -> LinearSvm {
        LinearSvm::new(
            vec![
                "Iris-setosa".to_string(),
                "Iris-versicolor".to_string(),
                "Iris-virginica".to_string(),
            ],
            vec![
                Machine {
                    positive: 0,
                    negative: 1,
                    weights: Array1::from(vec![-0.046, 0.521, -1.003, -0.464]),
                    bias: 1.451,
                },
                Machine {
                    positive: 0,
                    negative: 2,
                    weights: Array1::from(vec![-0.007, 0.178, -0.538, -0.292]),
                    bias: 1.510,
                },
                Machine {
                    positive: 1,
                    negative: 2,
                    weights: Array1::from(vec![0.05, 0.36, -1.32, -1.97]),
                    bias: 8.91,
                },
            ],
        )
    }

    #[test]
    fn setosa_row_predicts_first_class() {
        let model = iris_model();
        let record = FeatureRecord::new(5.1, 3.5, 1.4, 0.2);
        assert_eq!(model.predict(&record), "Iris-setosa");
    }

    #[test]
    fn virginica_row_predicts_third_class() {
        let model = iris_model();
        let record = FeatureRecord::new(6.3, 3.3, 6.0, 2.5);
        assert_eq!(model.predict(&record), "Iris-virginica");
    }

    #[test]
    fn versicolor_row_predicts_second_class() {
        let model = iris_model();
        let record = FeatureRecord::new(5.9, 3.0, 4.2, 1.5);
        assert_eq!(model.predict(&record), "Iris-versicolor");
    }

    #[test]
    fn prediction_is_idempotent() {
        let model = iris_model();
        let record = FeatureRecord::new(6.1, 2.8, 4.7, 1.2);

        let first = model.predict(&record).to_string();
        for _ in 0..10 {
            assert_eq!(model.predict(&record), first);
        }
    }

    #[test]
    fn bounds_of_the_input_range_yield_a_known_label() {
        let model = iris_model();

        for record in [
            FeatureRecord::new(0.1, 0.1, 0.1, 0.1),
            FeatureRecord::new(10.0, 10.0, 10.0, 10.0),
        ] {
            let label = model.predict(&record);
            assert!(model.classes().iter().any(|c| c == label));
        }
    }

    #[test]
    fn tie_goes_to_the_lowest_class_index() {
        // One vote each: (0 vs 1) -> 0, (1 vs 2) -> 1, (0 vs 2) -> 2.
        let model = LinearSvm::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                Machine {
                    positive: 0,
                    negative: 1,
                    weights: Array1::from(vec![1.0, 0.0, 0.0, 0.0]),
                    bias: 0.0,
                },
                Machine {
                    positive: 1,
                    negative: 2,
                    weights: Array1::from(vec![1.0, 0.0, 0.0, 0.0]),
                    bias: 0.0,
                },
                Machine {
                    positive: 0,
                    negative: 2,
                    weights: Array1::from(vec![-1.0, 0.0, 0.0, 0.0]),
                    bias: 0.0,
                },
            ],
        );

        let record = FeatureRecord::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(model.predict(&record), "a");
    }
}
