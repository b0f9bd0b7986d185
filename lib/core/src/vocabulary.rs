//! Attribute vocabulary
//!
//! The vocabulary fixes, for every attribute dimension, the ordered list of
//! values an item may carry. Value order defines the position of each value
//! inside its vector segment, and dimension order defines segment order, so
//! changing either changes the vector layout of every item.

use crate::error::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// One attribute dimension of the encoded vector, in segment order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Season,
    Occasion,
    Color,
    Material,
    Pattern,
    Style,
    Gender,
    CategoryParent,
}

impl Dimension {
    /// All dimensions in the order their segments are concatenated
    pub const ALL: [Dimension; 8] = [
        Dimension::Season,
        Dimension::Occasion,
        Dimension::Color,
        Dimension::Material,
        Dimension::Pattern,
        Dimension::Style,
        Dimension::Gender,
        Dimension::CategoryParent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Season => "season",
            Dimension::Occasion => "occasion",
            Dimension::Color => "color",
            Dimension::Material => "material",
            Dimension::Pattern => "pattern",
            Dimension::Style => "style",
            Dimension::Gender => "gender",
            Dimension::CategoryParent => "categoryParent",
        }
    }
}

/// Ordered valid values for every attribute dimension
///
/// Loaded once at startup and shared read-only between requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeVocabulary {
    /// Vocabulary version, bumped whenever the layout changes
    #[serde(default = "default_version")]
    pub version: u32,
    pub season: Vec<String>,
    pub occasion: Vec<String>,
    pub color: Vec<String>,
    pub material: Vec<String>,
    pub pattern: Vec<String>,
    pub style: Vec<String>,
    pub gender: Vec<String>,
    pub category_parent: Vec<String>,
}

fn default_version() -> u32 {
    1
}

const SEASON: &[&str] = &["spring", "summer", "autumn", "winter"];

const OCCASION: &[&str] = &[
    "daily", "school", "work", "party", "date", "formal", "travel", "wedding", "beach", "home",
    "sport", "special", "etc",
];

const COLOR: &[&str] = &[
    "black", "white", "red", "blue", "green", "yellow", "pink", "ivory", "beige", "light gray",
    "dark gray", "light yellow", "orange", "coral", "hot pink", "light green", "sky blue", "navy",
    "brown", "dark-brown", "gold", "silver", "purple", "camel", "colorful",
];

const MATERIAL: &[&str] = &[
    "denim", "linen", "cotton", "leather", "wool", "polyester", "nylon", "spandex", "acrylic",
    "silk", "rayon", "viscose", "other material",
];

const PATTERN: &[&str] = &[
    "solid", "striped", "plaid", "polka dot", "floral", "checkerboard", "argyle", "color-block",
    "gingham", "repeated", "geometric", "other pattern",
];

const STYLE: &[&str] = &[
    "casual", "sporty", "formal", "vintage", "streetwear", "comfortable", "business casual",
    "trendy", "modern", "classic", "minimalist", "bohemian", "luxury", "athleisure", "affordable",
    "premium", "kidcore", "basic", "artic", "dress-up", "hipster", "feminine", "chic", "punk",
    "kitsch", "etc",
];

const GENDER: &[&str] = &["man", "woman", "unisex"];

const CATEGORY_PARENT: &[&str] = &[
    "dresses", "tops", "pants", "skirts", "outerwear", "shoes", "bags", "headwear", "jewelry",
    "other",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for AttributeVocabulary {
    fn default() -> Self {
        Self {
            version: default_version(),
            season: owned(SEASON),
            occasion: owned(OCCASION),
            color: owned(COLOR),
            material: owned(MATERIAL),
            pattern: owned(PATTERN),
            style: owned(STYLE),
            gender: owned(GENDER),
            category_parent: owned(CATEGORY_PARENT),
        }
    }
}

impl AttributeVocabulary {
    /// The built-in vocabulary, initialized on first use
    pub fn builtin() -> &'static AttributeVocabulary {
        static BUILTIN: OnceLock<AttributeVocabulary> = OnceLock::new();
        BUILTIN.get_or_init(AttributeVocabulary::default)
    }

    /// Load and validate a vocabulary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let vocabulary: AttributeVocabulary = serde_json::from_str(&content)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Reject empty dimensions and duplicate values within a dimension
    pub fn validate(&self) -> Result<()> {
        for dimension in Dimension::ALL {
            let values = self.values(dimension);
            if values.is_empty() {
                return Err(Error::InvalidVocabulary(format!(
                    "dimension '{}' has no values",
                    dimension.as_str()
                )));
            }
            let mut seen = AHashSet::with_capacity(values.len());
            for value in values {
                if !seen.insert(value.as_str()) {
                    return Err(Error::InvalidVocabulary(format!(
                        "dimension '{}' lists '{}' twice",
                        dimension.as_str(),
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn values(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Season => &self.season,
            Dimension::Occasion => &self.occasion,
            Dimension::Color => &self.color,
            Dimension::Material => &self.material,
            Dimension::Pattern => &self.pattern,
            Dimension::Style => &self.style,
            Dimension::Gender => &self.gender,
            Dimension::CategoryParent => &self.category_parent,
        }
    }

    pub fn cardinality(&self, dimension: Dimension) -> usize {
        self.values(dimension).len()
    }

    /// Start index of a dimension's segment in the encoded vector
    pub fn offset(&self, dimension: Dimension) -> usize {
        Dimension::ALL
            .iter()
            .take_while(|d| **d != dimension)
            .map(|d| self.cardinality(*d))
            .sum()
    }

    /// Position of `value` inside its dimension's segment
    pub fn position(&self, dimension: Dimension, value: &str) -> Option<usize> {
        self.values(dimension).iter().position(|v| v == value)
    }

    /// Total encoded vector length
    pub fn dim(&self) -> usize {
        Dimension::ALL.iter().map(|d| self.cardinality(*d)).sum()
    }
}
