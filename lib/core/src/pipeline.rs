//! Outfit suggestion pipeline
//!
//! normalize → encode → aggregate → rank → group → compose, run
//! synchronously per request. The only shared state is the read-only
//! vocabulary.

use crate::aggregate::PreferenceAggregator;
use crate::compose::{CategoryGroups, Outfit, OutfitComposer, DEFAULT_OUTFIT_COUNT};
use crate::encoder::AttributeEncoder;
use crate::error::{Error, Result};
use crate::item::{ClothingItem, ClothingItemInput, DEFAULT_EMBEDDING_DIM};
use crate::rank::SimilarityRanker;
use crate::vocabulary::AttributeVocabulary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Optional preference filters sent alongside the wardrobe
///
/// Accepted for compatibility with existing clients. None of these fields
/// influence ranking or composition; the wardrobe centroid is the only
/// preference signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub selected_style: Option<String>,
    #[serde(default)]
    pub selected_occasion: Option<String>,
    #[serde(default)]
    pub temperature_low: Option<f64>,
    #[serde(default)]
    pub temperature_high: Option<f64>,
    #[serde(default)]
    pub personal_color: Option<String>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub when: Option<String>,
}

impl Preferences {
    pub fn is_empty(&self) -> bool {
        *self == Preferences::default()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StylistConfig {
    pub outfit_count: usize,
    /// Width client-supplied embeddings are padded or truncated to
    pub embedding_dim: usize,
}

impl Default for StylistConfig {
    fn default() -> Self {
        Self {
            outfit_count: DEFAULT_OUTFIT_COUNT,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

/// Suggests outfits from a submitted wardrobe
#[derive(Debug, Clone)]
pub struct Stylist {
    encoder: AttributeEncoder,
    aggregator: PreferenceAggregator,
    ranker: SimilarityRanker,
    composer: OutfitComposer,
    config: StylistConfig,
}

impl Stylist {
    pub fn new(vocabulary: Arc<AttributeVocabulary>, config: StylistConfig) -> Self {
        let encoder = AttributeEncoder::new(vocabulary);
        Self {
            aggregator: PreferenceAggregator::new(encoder.clone()),
            ranker: SimilarityRanker::new(encoder.clone()),
            composer: OutfitComposer::new(config.outfit_count),
            encoder,
            config,
        }
    }

    pub fn encoder(&self) -> &AttributeEncoder {
        &self.encoder
    }

    pub fn config(&self) -> &StylistConfig {
        &self.config
    }

    /// Compose `outfit_count` outfits from `clothes`
    ///
    /// An empty wardrobe is rejected with [`Error::EmptyInput`] before any
    /// encoding happens.
    pub fn suggest(&self, clothes: &[ClothingItemInput], preferences: &Preferences) -> Result<Vec<Outfit>> {
        if clothes.is_empty() {
            return Err(Error::EmptyInput);
        }
        info!("Received {} clothes", clothes.len());
        if !preferences.is_empty() {
            debug!("Ignoring preference filters: {:?}", preferences);
        }

        let items: Vec<ClothingItem> = clothes
            .iter()
            .map(|input| input.normalize_with_embedding_dim(self.config.embedding_dim))
            .collect();

        let centroid = self.aggregator.aggregate(&items)?;
        let ranked = self.ranker.rank(items, &centroid);
        let groups = CategoryGroups::from_ranked(ranked);

        if tracing::enabled!(tracing::Level::DEBUG) {
            for (slot, candidates) in groups.iter() {
                let names: Vec<&str> = candidates.iter().map(|r| r.item.name.as_str()).collect();
                debug!("Category group {}: {:?}", slot, names);
            }
        }

        let outfits = self.composer.compose(&groups);

        if tracing::enabled!(tracing::Level::DEBUG) {
            let names: Vec<Vec<&str>> = outfits
                .iter()
                .map(|o| o.pieces().iter().map(|p| p.item.name.as_str()).collect())
                .collect();
            debug!("Generated outfits: {:?}", names);
        }

        Ok(outfits)
    }
}

impl Default for Stylist {
    fn default() -> Self {
        Self::new(
            Arc::new(AttributeVocabulary::builtin().clone()),
            StylistConfig::default(),
        )
    }
}
