//! Clothing items
//!
//! [`ClothingItemInput`] is the lenient shape accepted at the request
//! boundary. [`ClothingItemInput::normalize`] is the only place defaults are
//! applied; everything downstream works on a fully populated [`ClothingItem`].

use serde::{Deserialize, Serialize};

/// Gender used when an item does not carry one
pub const DEFAULT_GENDER: &str = "unisex";

/// Category parent used when an item does not carry a usable one
pub const DEFAULT_CATEGORY_PARENT: &str = "other";

/// Child category used when an item lists none
pub const DEFAULT_CATEGORY_CHILD: &str = "default";

/// Width of the optional client-supplied embedding
pub const DEFAULT_EMBEDDING_DIM: usize = 128;

/// Known misspellings of [`DEFAULT_CATEGORY_PARENT`] sent by older clients
const MISSPELLED_PARENTS: &[&str] = &["orther"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryInput {
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub child: Option<Vec<String>>,
}

/// A clothing item as submitted by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItemInput {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: Option<CategoryInput>,
    #[serde(default)]
    pub season: Option<Vec<String>>,
    #[serde(default)]
    pub occasion: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<Vec<String>>,
    #[serde(default)]
    pub material: Option<Vec<String>>,
    #[serde(default)]
    pub pattern: Option<Vec<String>>,
    #[serde(default)]
    pub style: Option<Vec<String>>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub parent: String,
    pub child: Vec<String>,
}

/// A clothing item with every default applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub category: Category,
    pub season: Vec<String>,
    pub occasion: Vec<String>,
    pub color: Vec<String>,
    pub material: Vec<String>,
    pub pattern: Vec<String>,
    pub style: Vec<String>,
    pub gender: String,
    /// Client-supplied embedding, fixed to the configured width. Never used for ranking.
    pub embedding: Vec<f32>,
}

/// The `{id, name, imageUrl}` triple returned for each outfit piece
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl ClothingItemInput {
    /// Apply defaults with the standard embedding width
    pub fn normalize(&self) -> ClothingItem {
        self.normalize_with_embedding_dim(DEFAULT_EMBEDDING_DIM)
    }

    /// Apply defaults, padding or truncating the embedding to `embedding_dim`
    pub fn normalize_with_embedding_dim(&self, embedding_dim: usize) -> ClothingItem {
        let (parent, child) = match &self.category {
            Some(category) => (category.parent.as_deref(), category.child.as_deref()),
            None => (None, None),
        };

        ClothingItem {
            id: self.id.clone(),
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            category: Category {
                parent: fix_category_parent(parent),
                child: fix_category_child(child),
            },
            season: self.season.clone().unwrap_or_default(),
            occasion: self.occasion.clone().unwrap_or_default(),
            color: self.color.clone().unwrap_or_default(),
            material: self.material.clone().unwrap_or_default(),
            pattern: self.pattern.clone().unwrap_or_default(),
            style: self.style.clone().unwrap_or_default(),
            gender: fix_gender(self.gender.as_deref()),
            embedding: fix_embedding(self.embedding.as_deref(), embedding_dim),
        }
    }
}

impl ClothingItem {
    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

fn fix_category_parent(parent: Option<&str>) -> String {
    match parent {
        Some(p) if !p.is_empty() && !MISSPELLED_PARENTS.contains(&p) => p.to_string(),
        _ => DEFAULT_CATEGORY_PARENT.to_string(),
    }
}

fn fix_category_child(child: Option<&[String]>) -> Vec<String> {
    match child {
        Some(c) if !c.is_empty() => c.to_vec(),
        _ => vec![DEFAULT_CATEGORY_CHILD.to_string()],
    }
}

fn fix_gender(gender: Option<&str>) -> String {
    match gender {
        Some(g) if !g.is_empty() => g.to_string(),
        _ => DEFAULT_GENDER.to_string(),
    }
}

fn fix_embedding(embedding: Option<&[f32]>, dim: usize) -> Vec<f32> {
    let mut fixed: Vec<f32> = embedding
        .unwrap_or_default()
        .iter()
        .take(dim)
        .copied()
        .collect();
    fixed.resize(dim, 0.0);
    fixed
}
