//! Category tallies with the onepiece rule.

use std::collections::HashMap;

use crate::model::{Category, CoreCategory, Item};

/// Per-category item counts.
///
/// A onepiece functionally covers both the top and bottom role, so the
/// effective top and bottom counts each include the onepiece count.
/// Raw counts stay available for the balance imbalance check, which
/// deliberately looks at what the user actually owns per category.
#[derive(Debug, Default)]
pub(crate) struct CategoryTally {
    counts: HashMap<Category, usize>,
}

impl CategoryTally {
    pub(crate) fn collect<'a>(items: impl Iterator<Item = &'a Item>) -> Self {
        let mut counts = HashMap::new();
        for item in items {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Items in a category, as tagged.
    pub(crate) fn raw(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Onepiece items.
    pub(crate) fn onepiece(&self) -> usize {
        self.raw(Category::Onepiece)
    }

    /// Effective count for a core category: top and bottom absorb onepieces.
    pub(crate) fn effective(&self, core: CoreCategory) -> usize {
        match core {
            CoreCategory::Top => self.raw(Category::Top) + self.onepiece(),
            CoreCategory::Bottom => self.raw(Category::Bottom) + self.onepiece(),
            CoreCategory::Footwear => self.raw(Category::Footwear),
            CoreCategory::Outerwear => self.raw(Category::Outerwear),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onepiece_counts_toward_top_and_bottom() {
        let items = vec![
            Item::new(Category::Onepiece),
            Item::new(Category::Onepiece),
            Item::new(Category::Top),
        ];
        let tally = CategoryTally::collect(items.iter());
        assert_eq!(tally.effective(CoreCategory::Top), 3);
        assert_eq!(tally.effective(CoreCategory::Bottom), 2);
        assert_eq!(tally.raw(Category::Top), 1);
        assert_eq!(tally.raw(Category::Bottom), 0);
    }

    #[test]
    fn footwear_is_unaffected_by_onepiece() {
        let items = vec![Item::new(Category::Onepiece), Item::new(Category::Footwear)];
        let tally = CategoryTally::collect(items.iter());
        assert_eq!(tally.effective(CoreCategory::Footwear), 1);
        assert_eq!(tally.effective(CoreCategory::Outerwear), 0);
    }
}
