//! Seeded synthetic datasets for tests and benchmarks.

use ndarray::{Array1, Array2};
use rand::prelude::*;

use crate::data::Dataset;

/// Two-feature dataset that is linearly separable along feature 0
/// (negative → class 0, non-negative → class 1).
pub fn separable_dataset(n_samples: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut features = Vec::with_capacity(n_samples * 2);
    let mut labels = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let x0 = rng.gen::<f64>() * 4.0 - 2.0;
        let x1 = rng.gen::<f64>() * 4.0 - 2.0;
        features.push(x0);
        features.push(x1);
        labels.push(if x0 >= 0.0 { 1.0 } else { 0.0 });
    }

    let features = Array2::from_shape_vec((n_samples, 2), features)
        .expect("shape matches construction");
    Dataset::new(features, Array1::from_vec(labels)).expect("generated shapes agree")
}

/// Vehicle-like dataset with three features (horsepower, displacement,
/// weight). The label models an emissions-test verdict: heavier,
/// higher-powered vehicles with larger engines tend to fail (class 0),
/// with a little boundary noise.
pub fn vehicle_dataset(n_samples: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut features = Vec::with_capacity(n_samples * 3);
    let mut labels = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let horsepower = 60.0 + rng.gen::<f64>() * 240.0;
        let displacement = 80.0 + rng.gen::<f64>() * 320.0;
        let weight = 1500.0 + rng.gen::<f64>() * 3500.0;
        features.push(horsepower);
        features.push(displacement);
        features.push(weight);

        let score = horsepower / 300.0 + displacement / 400.0 + weight / 5000.0;
        let noise = (rng.gen::<f64>() - 0.5) * 0.1;
        labels.push(if score + noise < 1.6 { 1.0 } else { 0.0 });
    }

    let features = Array2::from_shape_vec((n_samples, 3), features)
        .expect("shape matches construction");
    Dataset::new(features, Array1::from_vec(labels)).expect("generated shapes agree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separable_is_deterministic_per_seed() {
        let a = separable_dataset(16, 7);
        let b = separable_dataset(16, 7);
        assert_eq!(a.features(), b.features());
        assert_eq!(a.labels(), b.labels());
    }

    #[test]
    fn separable_labels_follow_feature_zero() {
        let data = separable_dataset(64, 1);
        for (row, &label) in data.features().rows().into_iter().zip(data.labels()) {
            let expected = if row[0] >= 0.0 { 1.0 } else { 0.0 };
            assert_eq!(label, expected);
        }
    }

    #[test]
    fn vehicle_dataset_has_both_classes() {
        let data = vehicle_dataset(256, 42);
        let positives: f64 = data.labels().sum();
        assert!(positives > 0.0);
        assert!(positives < 256.0);
    }
}
