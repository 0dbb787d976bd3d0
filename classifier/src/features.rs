use ndarray::Array1;

/// Training-time column names, in the exact order the model was fitted with.
pub const FEATURE_NAMES: [&str; 4] = [
    "SepalLengthCm",
    "SepalWidthCm",
    "PetalLengthCm",
    "PetalWidthCm",
];

/// One flower measurement row, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    pub sepal_length: f32,
    pub sepal_width: f32,
    pub petal_length: f32,
    pub petal_width: f32,
}

impl FeatureRecord {
    pub fn new(sepal_length: f32, sepal_width: f32, petal_length: f32, petal_width: f32) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// The record as a model input row.
    ///
    /// Column order matches [`FEATURE_NAMES`]; values pass through unchanged.
    pub fn as_array(&self) -> Array1<f32> {
        Array1::from(vec![
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ])
    }
}
