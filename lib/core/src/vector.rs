use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A dense attribute vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Dot product, 0.0 when the dimensions differ
    #[inline]
    pub fn dot(&self, other: &Vector) -> f32 {
        self.dot_f64(other) as f32
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f32 {
        self.dot_f64(self).sqrt() as f32
    }

    // Accumulates in index order and in f64 so equal scores stay bit-identical
    #[inline]
    fn dot_f64(&self, other: &Vector) -> f64 {
        if self.dim() != other.dim() {
            return 0.0;
        }
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| f64::from(*a) * f64::from(*b))
            .sum()
    }

    /// Compute cosine similarity with another vector
    ///
    /// Returns 0.0 when either vector has zero norm or the dimensions differ,
    /// so the score is always a finite value in [-1, 1].
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let norm_a = self.dot_f64(self).sqrt();
        let norm_b = other.dot_f64(other).sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (self.dot_f64(other) / (norm_a * norm_b)).clamp(-1.0, 1.0) as f32
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        assert_eq!(self.dim(), other.dim());
        Vector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        Vector::new(self.data.iter().map(|x| x * scalar).collect())
    }
}
