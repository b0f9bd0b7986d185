//! Outfit composition
//!
//! Ranked items are grouped by slot, then outfit `i` takes the `i`-th best
//! candidate of every slot. A slot with fewer candidates than outfits keeps
//! repeating its last candidate; a slot with no candidates is left out.

use crate::category::{self, Slot};
use crate::item::{ClothingItem, ItemSummary};
use crate::rank::RankedItem;
use smallvec::SmallVec;

/// Number of outfits produced per request unless configured otherwise
pub const DEFAULT_OUTFIT_COUNT: usize = 3;

/// Ranked candidates per slot, best first
#[derive(Debug, Clone, Default)]
pub struct CategoryGroups {
    groups: [Vec<RankedItem>; 5],
}

impl CategoryGroups {
    /// Group ranked items by slot, preserving rank order within each slot
    pub fn from_ranked(ranked: Vec<RankedItem>) -> Self {
        let mut groups = Self::default();
        for ranked_item in ranked {
            let slot = category::normalize(&ranked_item.item.category.parent);
            groups.groups[slot.index()].push(ranked_item);
        }
        groups
    }

    pub fn candidates(&self, slot: Slot) -> &[RankedItem] {
        &self.groups[slot.index()]
    }

    /// Non-empty slots with their candidates, in priority order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[RankedItem])> + '_ {
        Slot::PRIORITY
            .into_iter()
            .map(move |slot| (slot, self.candidates(slot)))
            .filter(|(_, candidates)| !candidates.is_empty())
    }
}

/// One item filling one slot of an outfit
#[derive(Debug, Clone)]
pub struct OutfitPiece {
    pub slot: Slot,
    pub item: ClothingItem,
}

/// At most one item per slot, in slot priority order
#[derive(Debug, Clone, Default)]
pub struct Outfit {
    pieces: SmallVec<[OutfitPiece; 5]>,
}

impl Outfit {
    pub fn pieces(&self) -> &[OutfitPiece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn get(&self, slot: Slot) -> Option<&ClothingItem> {
        self.pieces.iter().find(|p| p.slot == slot).map(|p| &p.item)
    }

    /// The `{id, name, imageUrl}` triples, in slot order
    pub fn summaries(&self) -> Vec<ItemSummary> {
        self.pieces.iter().map(|p| p.item.summary()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OutfitComposer {
    outfit_count: usize,
}

impl Default for OutfitComposer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTFIT_COUNT)
    }
}

impl OutfitComposer {
    pub fn new(outfit_count: usize) -> Self {
        Self { outfit_count }
    }

    pub fn outfit_count(&self) -> usize {
        self.outfit_count
    }

    /// Build exactly `outfit_count` outfits from the grouped candidates
    pub fn compose(&self, groups: &CategoryGroups) -> Vec<Outfit> {
        (0..self.outfit_count)
            .map(|i| {
                let pieces = groups
                    .iter()
                    .map(|(slot, candidates)| OutfitPiece {
                        slot,
                        item: candidates[i.min(candidates.len() - 1)].item.clone(),
                    })
                    .collect();
                Outfit { pieces }
            })
            .collect()
    }
}
