//! # Stylist Core
//!
//! Core library for the Stylist outfit suggestion service.
//!
//! This crate turns a submitted wardrobe into ranked, complete outfits:
//!
//! - [`AttributeVocabulary`] - Ordered valid values per attribute dimension
//! - [`ClothingItemInput`] / [`ClothingItem`] - Boundary shape and its defaulted form
//! - [`AttributeEncoder`] - Multi-hot attribute vectors
//! - [`PreferenceAggregator`] - Wardrobe centroid
//! - [`SimilarityRanker`] - Cosine ranking against the centroid
//! - [`OutfitComposer`] - One ranked item per slot per outfit
//! - [`Stylist`] - The whole pipeline
//!
//! ## Example
//!
//! ```rust
//! use stylist_core::{ClothingItemInput, Preferences, Stylist};
//!
//! let clothes: Vec<ClothingItemInput> = serde_json::from_str(r#"[
//!     {"id": "1", "name": "Tee", "category": {"parent": "tops", "child": ["tee"]}, "color": ["white"]},
//!     {"id": "2", "name": "Jeans", "category": {"parent": "pants", "child": ["jeans"]}, "color": ["blue"]}
//! ]"#).unwrap();
//!
//! let stylist = Stylist::default();
//! let outfits = stylist.suggest(&clothes, &Preferences::default()).unwrap();
//! assert_eq!(outfits.len(), 3);
//! assert_eq!(outfits[0].len(), 2);
//! ```

pub mod aggregate;
pub mod catalog;
pub mod category;
pub mod compose;
pub mod encoder;
pub mod error;
pub mod item;
pub mod pipeline;
pub mod rank;
pub mod vector;
pub mod vocabulary;

pub use aggregate::{centroid, PreferenceAggregator};
pub use catalog::Catalog;
pub use category::Slot;
pub use compose::{CategoryGroups, Outfit, OutfitComposer, OutfitPiece, DEFAULT_OUTFIT_COUNT};
pub use encoder::AttributeEncoder;
pub use error::{Error, ErrorKind, Result};
pub use item::{Category, CategoryInput, ClothingItem, ClothingItemInput, ItemSummary, DEFAULT_EMBEDDING_DIM};
pub use pipeline::{Preferences, Stylist, StylistConfig};
pub use rank::{RankedItem, SimilarityRanker};
pub use vector::Vector;
pub use vocabulary::{AttributeVocabulary, Dimension};
