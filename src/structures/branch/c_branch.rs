//! Implementation details of the [branch trait](Branch) for the [CBranch] structure.

use std::collections::BTreeSet;

use crate::structures::{
    branch::{Branch, CBranch},
    item::ItemId,
    literal::{CLiteral, Literal},
};

impl CBranch {
    /// Insert a literal into the branch.
    /// Returns false if the literal was already present.
    pub fn insert(&mut self, literal: CLiteral) -> bool {
        self.literals.insert(literal)
    }

    /// Whether the given literal is in the branch.
    pub fn contains(&self, literal: &CLiteral) -> bool {
        self.literals.contains(literal)
    }

    /// A clone of the branch with `literal` included.
    pub fn extended(&self, literal: CLiteral) -> Self {
        let mut fresh = self.clone();
        fresh.insert(literal);
        fresh
    }

    /// Whether every literal of the branch is in `other`, and `other` is strictly larger.
    pub fn proper_subset_of(&self, other: &CBranch) -> bool {
        self.literals.len() < other.literals.len() && self.literals.is_subset(&other.literals)
    }
}

impl Branch for CBranch {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    fn items(&self) -> impl Iterator<Item = ItemId> {
        self.literals.iter().map(|literal| literal.item())
    }

    fn size(&self) -> usize {
        self.literals.len()
    }

    fn contradictory(&self) -> bool {
        // Literals sorted by item then polarity, and exact duplicates are impossible.
        // So, both polarities of an item appear as adjacent literals of the same item.
        let mut prior: Option<ItemId> = None;
        for literal in &self.literals {
            if prior == Some(literal.item()) {
                return true;
            }
            prior = Some(literal.item());
        }
        false
    }

    fn canonical(self) -> CBranch {
        self
    }
}

impl Branch for Vec<CLiteral> {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn items(&self) -> impl Iterator<Item = ItemId> {
        self.iter().map(|literal| literal.item())
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn contradictory(&self) -> bool {
        self.iter()
            .any(|literal| self.contains(&literal.negate()))
    }

    fn canonical(self) -> CBranch {
        self.into_iter().collect()
    }
}

impl FromIterator<CLiteral> for CBranch {
    fn from_iter<I: IntoIterator<Item = CLiteral>>(iter: I) -> Self {
        CBranch {
            literals: BTreeSet::from_iter(iter),
        }
    }
}

impl std::fmt::Display for CBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        let mut literals = self.literals.iter().peekable();
        while let Some(literal) = literals.next() {
            match literals.peek() {
                Some(_) => write!(f, "{literal} ")?,
                None => write!(f, "{literal}")?,
            }
        }
        write!(f, "]")
    }
}
