use ndarray::{array, Array2};
use rand::{rngs::StdRng, SeedableRng};
use rusty_perceptron::{
    sampling::{ClusterSampler, ClusterSpec, GaussianSampler},
    LinearClassifier, PerceptronError,
};

fn two_clusters(seed: u64) -> (Array2<f64>, Vec<u8>) {
    let mut sampler = GaussianSampler::new(StdRng::seed_from_u64(seed));
    sampler
        .sample_all(&[
            ClusterSpec::isotropic(array![2.0, 2.0], 100, 1),
            ClusterSpec::isotropic(array![-2.0, -2.0], 100, 0),
        ])
        .unwrap()
}

#[test]
fn test_batch_training_separates_clusters() {
    for seed in [1, 2, 3] {
        let (x, y) = two_clusters(seed);
        let mut classifier = LinearClassifier::new(50, 0.2).unwrap();
        classifier.train_batch(x.view(), &y).unwrap();

        assert_eq!(1, classifier.predict(array![2.0, 2.0].view()).unwrap());
        assert_eq!(0, classifier.predict(array![-2.0, -2.0].view()).unwrap());
    }
}

#[test]
fn test_batch_training_is_reproducible() {
    let (x, y) = two_clusters(42);
    let mut a = LinearClassifier::new(50, 0.2).unwrap();
    let mut b = LinearClassifier::with_seed(50, 0.2, 1234).unwrap();
    a.train_batch(x.view(), &y).unwrap();
    b.train_batch(x.view(), &y).unwrap();
    assert_eq!(a.weights(), b.weights());
}

#[test]
fn test_online_then_predict_keeps_dimensionality() {
    let (x, y) = two_clusters(8);
    let mut classifier = LinearClassifier::with_seed(50, 0.01, 8).unwrap();
    for (row, label) in x.rows().into_iter().zip(y.iter()).take(5) {
        classifier.observe_one(row, *label).unwrap();
    }

    assert_eq!(Some(2), classifier.dimensionality());
    assert_eq!(5, classifier.history().len());
    assert!(classifier.predict(array![0.0, 1.0].view()).is_ok());
    assert_eq!(
        Err(PerceptronError::DimensionalityMismatch {
            expected: 2,
            actual: 3
        }),
        classifier.predict(array![0.0, 1.0, 2.0].view())
    );
    assert!(classifier.visualization().is_ok());
}
