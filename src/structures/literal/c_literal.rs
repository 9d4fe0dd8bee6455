//! Implementation details of the [literal trait](Literal) for the [CLiteral] structure.

use crate::structures::literal::{CLiteral, Literal};

use super::ItemId;

impl Literal for CLiteral {
    fn new(item: ItemId, polarity: bool) -> Self {
        Self { item, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            item: self.item,
            polarity: !self.polarity,
        }
    }

    fn item(&self) -> ItemId {
        self.item
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.item == other.item {
            self.polarity.cmp(&other.polarity)
        } else {
            self.item.cmp(&other.item)
        }
    }
}

impl PartialEq for CLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item && self.polarity == other.polarity
    }
}

impl std::hash::Hash for CLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.item.hash(state);
        self.polarity.hash(state);
    }
}

impl Eq for CLiteral {}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.item),
            false => write!(f, "-{}", self.item),
        }
    }
}
