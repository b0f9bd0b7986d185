//! Wardrobe centroid
//!
//! The centroid of a wardrobe's encoded vectors stands in for the user's
//! preference profile during ranking.

use crate::encoder::AttributeEncoder;
use crate::error::{Error, Result};
use crate::item::ClothingItem;
use crate::vector::Vector;

#[derive(Debug, Clone)]
pub struct PreferenceAggregator {
    encoder: AttributeEncoder,
}

impl PreferenceAggregator {
    pub fn new(encoder: AttributeEncoder) -> Self {
        Self { encoder }
    }

    /// Element-wise mean of the encoded vectors of `items`
    ///
    /// Fails with [`Error::EmptyInput`] before encoding anything when `items`
    /// is empty.
    pub fn aggregate(&self, items: &[ClothingItem]) -> Result<Vector> {
        if items.is_empty() {
            return Err(Error::EmptyInput);
        }
        let vectors: Vec<Vector> = items.iter().map(|item| self.encoder.encode(item)).collect();
        centroid(&vectors)
    }
}

/// Element-wise mean of `vectors`, which must all share one dimension
pub fn centroid(vectors: &[Vector]) -> Result<Vector> {
    let first = vectors.first().ok_or(Error::EmptyInput)?;
    let dim = first.dim();

    let mut sum = Vector::zeros(dim);
    for vector in vectors {
        if vector.dim() != dim {
            return Err(Error::Aggregation(format!(
                "dimension mismatch: expected {}, got {}",
                dim,
                vector.dim()
            )));
        }
        sum = &sum + vector;
    }

    let mean = &sum * (1.0 / vectors.len() as f32);
    if mean.as_slice().iter().any(|x| !x.is_finite()) {
        return Err(Error::Aggregation("centroid is not finite".to_string()));
    }
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ClothingItemInput;
    use crate::vocabulary::AttributeVocabulary;
    use std::sync::Arc;

    #[test]
    fn test_empty_wardrobe_rejected() {
        let aggregator =
            PreferenceAggregator::new(AttributeEncoder::new(Arc::new(AttributeVocabulary::default())));
        assert!(matches!(aggregator.aggregate(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_empty_vectors_rejected() {
        assert!(matches!(centroid(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_mean_of_vectors() {
        let vectors = vec![
            Vector::new(vec![1.0, 0.0, 1.0]),
            Vector::new(vec![0.0, 0.0, 1.0]),
        ];
        let mean = centroid(&vectors).unwrap();
        assert_eq!(mean.as_slice(), &[0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_dimension_mismatch_is_aggregation_error() {
        let vectors = vec![Vector::new(vec![1.0, 0.0]), Vector::new(vec![1.0])];
        assert!(matches!(centroid(&vectors), Err(Error::Aggregation(_))));
    }

    #[test]
    fn test_single_item_centroid_equals_its_vector() {
        let encoder = AttributeEncoder::new(Arc::new(AttributeVocabulary::default()));
        let item = ClothingItemInput {
            id: "1".to_string(),
            color: Some(vec!["navy".to_string()]),
            ..Default::default()
        }
        .normalize();

        let aggregator = PreferenceAggregator::new(encoder.clone());
        let mean = aggregator.aggregate(std::slice::from_ref(&item)).unwrap();
        assert_eq!(mean, encoder.encode(&item));
    }
}
