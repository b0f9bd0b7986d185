// Integration tests for Stylist
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use stylist::prelude::*;
use stylist::Vector;

fn wardrobe(value: serde_json::Value) -> Vec<ClothingItemInput> {
    serde_json::from_value(value).unwrap()
}

fn ids(outfit: &Outfit) -> Vec<&str> {
    outfit.pieces().iter().map(|p| p.item.id.as_str()).collect()
}

#[test]
fn test_full_wardrobe_pipeline() {
    let clothes = wardrobe(json!([
        {"id": "tee", "name": "White tee", "imageUrl": "tee.png",
         "category": {"parent": "tops", "child": ["tee"]},
         "season": ["summer"], "color": ["white"], "style": ["casual", "basic"], "gender": "woman"},
        {"id": "blazer", "name": "Wool blazer", "imageUrl": "blazer.png",
         "category": {"parent": "outerwear", "child": ["blazers"]},
         "season": ["autumn"], "color": ["navy"], "material": ["wool"], "style": ["formal"], "gender": "woman"},
        {"id": "jeans", "name": "Jeans", "imageUrl": "jeans.png",
         "category": {"parent": "Pants", "child": ["jeans"]},
         "season": ["summer"], "color": ["blue"], "material": ["denim"], "style": ["casual"], "gender": "woman"},
        {"id": "sneakers", "name": "Sneakers", "imageUrl": "sneakers.png",
         "category": {"parent": "shoes", "child": ["sneakers"]},
         "season": ["summer"], "color": ["white"], "style": ["casual"], "gender": "unisex"},
        {"id": "necklace", "name": "Necklace", "imageUrl": "necklace.png",
         "category": {"parent": "jewelry", "child": ["necklaces"]},
         "color": ["gold"], "gender": "woman"},
        {"id": "scarf", "name": "Scarf", "imageUrl": "scarf.png",
         "category": {"parent": "orther", "child": []}}
    ]));

    let outfits = Stylist::default()
        .suggest(&clothes, &Preferences::default())
        .unwrap();

    assert_eq!(outfits.len(), 3);
    for outfit in &outfits {
        let slots: Vec<Slot> = outfit.pieces().iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![Slot::Top, Slot::Bottom, Slot::Shoes, Slot::Accessory]);
        assert_eq!(outfit.get(Slot::Bottom).unwrap().id, "jeans");
        assert_eq!(outfit.get(Slot::Shoes).unwrap().id, "sneakers");
    }

    // The casual summer tee sits closer to the wardrobe average than the blazer
    assert_eq!(outfits[0].get(Slot::Top).unwrap().id, "tee");
    assert_eq!(outfits[1].get(Slot::Top).unwrap().id, "blazer");
    assert_eq!(outfits[2].get(Slot::Top).unwrap().id, "blazer");
}

#[test]
fn test_three_tops_fill_three_outfits() {
    let clothes = wardrobe(json!([
        {"id": "C", "category": {"parent": "tops"}, "color": ["red"], "style": ["punk"]},
        {"id": "B", "category": {"parent": "tops"}, "color": ["black"], "style": ["casual", "vintage"]},
        {"id": "A", "category": {"parent": "tops"}, "color": ["black"], "style": ["casual"]}
    ]));

    let outfits = Stylist::default()
        .suggest(&clothes, &Preferences::default())
        .unwrap();

    let tops: Vec<Vec<&str>> = outfits.iter().map(ids).collect();
    assert_eq!(tops, vec![vec!["A"], vec!["B"], vec!["C"]]);
}

#[test]
fn test_deterministic_across_runs() {
    let clothes = wardrobe(json!([
        {"id": "1", "category": {"parent": "tops"}, "color": ["white"]},
        {"id": "2", "category": {"parent": "tops"}, "color": ["white"]},
        {"id": "3", "category": {"parent": "bag"}, "color": ["camel"]},
        {"id": "4", "category": {"parent": "headwear"}, "style": ["sporty"]}
    ]));

    let stylist = Stylist::default();
    let first: Vec<Vec<String>> = stylist
        .suggest(&clothes, &Preferences::default())
        .unwrap()
        .iter()
        .map(|o| ids(o).into_iter().map(String::from).collect())
        .collect();

    for _ in 0..5 {
        let again: Vec<Vec<String>> = stylist
            .suggest(&clothes, &Preferences::default())
            .unwrap()
            .iter()
            .map(|o| ids(o).into_iter().map(String::from).collect())
            .collect();
        assert_eq!(first, again);
    }
    assert_eq!(first[0], vec!["1", "3", "4"]);
    assert_eq!(first[1], vec!["2", "3", "4"]);
}

#[test]
fn test_empty_wardrobe_rejected() {
    let err = Stylist::default()
        .suggest(&[], &Preferences::default())
        .unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
    assert_eq!(err.kind(), ErrorKind::Client);
}

#[test]
fn test_scores_within_unit_range() {
    let vocabulary = Arc::new(AttributeVocabulary::default());
    let encoder = AttributeEncoder::new(vocabulary);
    let items: Vec<ClothingItem> = wardrobe(json!([
        {"id": "1", "color": ["red", "blue"], "season": ["winter"]},
        {"id": "2", "gender": "robot", "category": {"parent": "spaceship"}},
        {"id": "3", "style": ["chic"], "pattern": ["floral"]}
    ]))
    .iter()
    .map(ClothingItemInput::normalize)
    .collect();

    let centroid = PreferenceAggregator::new(encoder.clone())
        .aggregate(&items)
        .unwrap();
    let ranked = SimilarityRanker::new(encoder).rank(items, &centroid);

    assert_eq!(ranked.len(), 3);
    for r in &ranked {
        assert!((-1.0..=1.0).contains(&r.score), "score {} out of range", r.score);
    }
    // Item 2 encodes to the zero vector and falls back to 0.0
    assert_eq!(ranked.last().unwrap().item.id, "2");
    assert_eq!(ranked.last().unwrap().score, 0.0);
}

#[test]
fn test_custom_vocabulary_changes_layout() {
    let mut vocabulary = AttributeVocabulary::default();
    vocabulary.version = 2;
    vocabulary.category_parent.push("swimwear".to_string());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&vocabulary).unwrap().as_bytes())
        .unwrap();

    let loaded = AttributeVocabulary::load(file.path()).unwrap();
    let encoder = AttributeEncoder::new(Arc::new(loaded));
    assert_eq!(encoder.vector_dim(), 107);

    let item = ClothingItemInput {
        id: "s".to_string(),
        gender: Some("robot".to_string()),
        category: Some(CategoryInput {
            parent: Some("swimwear".to_string()),
            child: None,
        }),
        ..Default::default()
    }
    .normalize();
    let mut expected = Vector::zeros(107);
    expected.as_mut_slice()[106] = 1.0;
    assert_eq!(encoder.encode(&item), expected);
}

#[test]
fn test_catalog_loading() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        json!([
            {"id": "ref-1", "name": "Trench coat", "imageUrl": "trench.png",
             "category": {"parent": "outerwear", "child": ["coats"]},
             "embedding": [0.1, 0.2, 0.3]}
        ])
        .to_string()
        .as_bytes(),
    )
    .unwrap();

    let catalog = Catalog::load(file.path(), 8).unwrap();
    assert_eq!(catalog.len(), 1);
    let coat = catalog.get("ref-1").unwrap();
    assert_eq!(coat.embedding.len(), 8);
    assert_eq!(coat.category.child, vec!["coats".to_string()]);
}
