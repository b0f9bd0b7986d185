//! Attribute encoder
//!
//! Converts a normalized clothing item into a fixed-length multi-hot vector.
//! Each dimension of the vocabulary owns one segment; segments are
//! concatenated in [`Dimension::ALL`] order. Values missing from the
//! vocabulary are skipped, so encoding never fails.

use crate::item::ClothingItem;
use crate::vector::Vector;
use crate::vocabulary::{AttributeVocabulary, Dimension};
use std::sync::Arc;

/// Encoder that maps item attributes onto the vocabulary layout
#[derive(Debug, Clone)]
pub struct AttributeEncoder {
    vocabulary: Arc<AttributeVocabulary>,
}

impl AttributeEncoder {
    pub fn new(vocabulary: Arc<AttributeVocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Get the total vector dimension for this encoder
    pub fn vector_dim(&self) -> usize {
        self.vocabulary.dim()
    }

    pub fn vocabulary(&self) -> &AttributeVocabulary {
        &self.vocabulary
    }

    /// Encode an item into its attribute vector
    ///
    /// Gender and category parent are single-valued and encode one-hot;
    /// every other dimension encodes multi-hot.
    pub fn encode(&self, item: &ClothingItem) -> Vector {
        let mut vector = Vector::zeros(self.vector_dim());
        let data = vector.as_mut_slice();

        for dimension in Dimension::ALL {
            let offset = self.vocabulary.offset(dimension);
            match dimension {
                Dimension::Gender => self.encode_values(data, offset, dimension, [&item.gender]),
                Dimension::CategoryParent => {
                    self.encode_values(data, offset, dimension, [&item.category.parent])
                }
                _ => self.encode_values(data, offset, dimension, attribute_values(item, dimension)),
            }
        }

        vector
    }

    fn encode_values<'a, I>(&self, data: &mut [f32], offset: usize, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for value in values {
            if let Some(position) = self.vocabulary.position(dimension, value) {
                data[offset + position] = 1.0;
            }
        }
    }
}

fn attribute_values(item: &ClothingItem, dimension: Dimension) -> &[String] {
    match dimension {
        Dimension::Season => &item.season,
        Dimension::Occasion => &item.occasion,
        Dimension::Color => &item.color,
        Dimension::Material => &item.material,
        Dimension::Pattern => &item.pattern,
        Dimension::Style => &item.style,
        Dimension::Gender | Dimension::CategoryParent => &[],
    }
}
