//! Reference catalog
//!
//! A static JSON file of pre-embedded items loaded once at startup. Ranking
//! always re-encodes submitted items, so the catalog's stored embeddings are
//! only carried and served, never scored against.

use crate::error::{Error, Result};
use crate::item::{ClothingItem, ClothingItemInput};
use ahash::AHashMap;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ClothingItem>,
    by_id: AHashMap<String, usize>,
    embedding_dim: usize,
}

impl Catalog {
    pub fn empty(embedding_dim: usize) -> Self {
        Self {
            embedding_dim,
            ..Default::default()
        }
    }

    /// Load a catalog file, fixing each embedding to `embedding_dim` values
    pub fn load<P: AsRef<Path>>(path: P, embedding_dim: usize) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let inputs: Vec<ClothingItemInput> = serde_json::from_str(&content)
            .map_err(|e| Error::Catalog(format!("{}: {}", path.display(), e)))?;

        let catalog = Self::from_inputs(inputs, embedding_dim);
        info!("Loaded {} catalog items from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn from_inputs(inputs: Vec<ClothingItemInput>, embedding_dim: usize) -> Self {
        let mut catalog = Self::empty(embedding_dim);
        for input in inputs {
            let item = input.normalize_with_embedding_dim(embedding_dim);
            if let Some(&existing) = catalog.by_id.get(&item.id) {
                warn!("Duplicate catalog item id '{}', keeping the later entry", item.id);
                catalog.items[existing] = item;
                continue;
            }
            catalog.by_id.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.by_id.get(id).map(|&index| &self.items[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClothingItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_fixes_embeddings_and_defaults() {
        let file = write_catalog(
            r#"[
                {"id": "c1", "name": "Tee", "imageUrl": "a.png",
                 "category": {"parent": "orther", "child": []},
                 "embedding": [0.5, 0.25]},
                {"id": "c2", "name": "Boots", "imageUrl": "b.png",
                 "category": {"parent": "shoes", "child": ["boots"]},
                 "embedding": [1, 2, 3, 4, 5, 6]}
            ]"#,
        );

        let catalog = Catalog::load(file.path(), 4).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.embedding_dim(), 4);

        let tee = catalog.get("c1").unwrap();
        assert_eq!(tee.category.parent, "other");
        assert_eq!(tee.embedding, vec![0.5, 0.25, 0.0, 0.0]);

        let boots = catalog.get("c2").unwrap();
        assert_eq!(boots.embedding, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_later_entry() {
        let inputs = vec![
            ClothingItemInput {
                id: "dup".to_string(),
                name: "first".to_string(),
                ..Default::default()
            },
            ClothingItemInput {
                id: "dup".to_string(),
                name: "second".to_string(),
                ..Default::default()
            },
        ];
        let catalog = Catalog::from_inputs(inputs, 8);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("dup").unwrap().name, "second");
    }

    #[test]
    fn test_malformed_catalog() {
        let file = write_catalog("{not json");
        assert!(matches!(
            Catalog::load(file.path(), 128),
            Err(Error::Catalog(_))
        ));
    }

    #[test]
    fn test_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load(dir.path().join("clothes.json"), 128),
            Err(Error::Io(_))
        ));
    }
}
