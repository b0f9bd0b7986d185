//! Similarity ranking
//!
//! Scores every item by cosine similarity between its own encoded vector and
//! the wardrobe centroid, then orders items by descending score.

use crate::encoder::AttributeEncoder;
use crate::item::ClothingItem;
use crate::vector::Vector;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// An item together with its similarity to the centroid
#[derive(Debug, Clone)]
pub struct RankedItem {
    pub item: ClothingItem,
    /// Cosine similarity in [-1, 1]; 0.0 when either vector has zero norm
    pub score: f32,
}

#[derive(Debug, Clone)]
pub struct SimilarityRanker {
    encoder: AttributeEncoder,
}

impl SimilarityRanker {
    pub fn new(encoder: AttributeEncoder) -> Self {
        Self { encoder }
    }

    /// Rank `items` by similarity to `centroid`, highest first
    ///
    /// The sort is stable: items with equal scores keep their input order.
    pub fn rank(&self, items: Vec<ClothingItem>, centroid: &Vector) -> Vec<RankedItem> {
        let mut results: Vec<RankedItem> = items
            .into_iter()
            .map(|item| {
                let score = self.encoder.encode(&item).cosine_similarity(centroid);
                RankedItem { item, score }
            })
            .collect();

        results.sort_by_key(|r| Reverse(OrderedFloat(r.score)));
        results
    }
}
