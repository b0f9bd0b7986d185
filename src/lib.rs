//! # Stylist
//!
//! Outfit suggestions from a wardrobe, without a learned model.
//!
//! Every submitted item is encoded as a multi-hot vector over a fixed
//! attribute vocabulary. The wardrobe's mean vector stands in for the user's
//! taste; items are ranked by cosine similarity to it and then dealt into
//! outfits one slot (top, bottom, shoes, bag, accessory) at a time.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! stylist --http-port 8000 --catalog data/clothes.json
//! curl -X POST localhost:8000/suggest-outfit -H 'content-type: application/json' \
//!      -d '{"clothes": [{"id": "1", "name": "Tee", "category": {"parent": "tops", "child": []}}]}'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use stylist::prelude::*;
//!
//! let clothes = vec![
//!     ClothingItemInput {
//!         id: "1".to_string(),
//!         name: "Oxford shirt".to_string(),
//!         category: Some(CategoryInput { parent: Some("tops".to_string()), child: None }),
//!         ..Default::default()
//!     },
//! ];
//!
//! let outfits = Stylist::default().suggest(&clothes, &Preferences::default()).unwrap();
//! assert_eq!(outfits.len(), 3);
//! assert_eq!(outfits[0].get(Slot::Top).unwrap().id, "1");
//! ```
//!
//! ## Crate Structure
//!
//! - `stylist-core` - Vocabulary, encoding, ranking, composition, catalog
//! - `stylist-api` - REST API

// Re-export core types
pub use stylist_core::{
    AttributeEncoder, AttributeVocabulary, Catalog, CategoryGroups, CategoryInput, ClothingItem,
    ClothingItemInput, Dimension, Error, ErrorKind, ItemSummary, Outfit, OutfitComposer,
    Preferences, PreferenceAggregator, RankedItem, Result, SimilarityRanker, Slot, Stylist,
    StylistConfig, Vector,
};

// Re-export API
pub use stylist_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AttributeEncoder, AttributeVocabulary, Catalog, CategoryGroups, CategoryInput,
        ClothingItem, ClothingItemInput, Error, ErrorKind, Outfit, OutfitComposer, Preferences,
        PreferenceAggregator, SimilarityRanker, Slot, Stylist, StylistConfig,
    };
}
