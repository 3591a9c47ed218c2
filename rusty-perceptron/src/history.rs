use ndarray::{Array1, ArrayView1, ArrayView2};

/// Training examples kept around for plotting. The learning rules never read it.
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    features: Vec<Array1<f64>>, // augmented, bias column first
    labels: Vec<u8>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, augmented: Array1<f64>, label: u8) {
        self.features.push(augmented);
        self.labels.push(label);
    }

    /// Replaces the contents with the rows of an augmented design matrix.
    pub fn replace_with(&mut self, design: ArrayView2<f64>, labels: &[u8]) {
        self.features = design.rows().into_iter().map(|r| r.to_owned()).collect();
        self.labels = labels.to_vec();
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Iterates `(augmented features, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, u8)> + '_ {
        self.features
            .iter()
            .zip(self.labels.iter())
            .map(|(x, y)| (x.view(), *y))
    }

    /// Min and max of one augmented column (column 0 is the bias).
    pub fn column_range(&self, column: usize) -> Option<(f64, f64)> {
        self.features
            .iter()
            .filter_map(|x| x.get(column).copied())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
