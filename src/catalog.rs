use crate::error::{LgResult, LinkographError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One position in the analysed design sequence, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: usize,
    pub name: String,
}

/// Largest move timeline the service will materialise in one response.
pub const MAX_MOVE_COUNT: usize = 100_000;

/// The move timeline for `move_count` moves.
pub fn move_sequence(move_count: usize) -> Vec<Move> {
    (1..=move_count)
        .map(|id| Move {
            id,
            name: format!("Move {}", id),
        })
        .collect()
}

/// Identity of a candidate link, 0-based. Renders as `"<move1>-<move2>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId {
    pub move1: usize,
    pub move2: usize,
}

impl LinkId {
    pub fn new(move1: usize, move2: usize) -> Self {
        Self { move1, move2 }
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.move1, self.move2)
    }
}

impl FromStr for LinkId {
    type Err = LinkographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| LinkographError::InvalidLinkId(s.to_string()))?;
        let parse = |p: &str| {
            p.trim()
                .parse::<usize>()
                .map_err(|_| LinkographError::InvalidLinkId(s.to_string()))
        };
        Ok(LinkId::new(parse(a)?, parse(b)?))
    }
}

/// A candidate link between two moves and whether the analyst has marked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPair {
    pub move1: usize,
    pub move2: usize,
    pub selected: bool,
}

impl LinkPair {
    pub fn id(&self) -> LinkId {
        LinkId::new(self.move1, self.move2)
    }

    pub fn diagonal_index(&self) -> usize {
        self.move2 - self.move1 - 1
    }
}

/// Every candidate link for one move count, ordered by `move1` then `move2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCatalog {
    move_count: usize,
    max_diagonal: usize,
    pairs: Vec<LinkPair>,
}

impl LinkCatalog {
    /// Enumerates the lattice. For each `move1`, scanning stops at the first
    /// `move2` whose diagonal index reaches `max_diagonal`.
    pub fn generate(move_count: usize, max_diagonal: usize) -> Self {
        let mut pairs = Vec::new();
        for i in 0..move_count {
            for j in (i + 1)..move_count {
                if j - i - 1 >= max_diagonal {
                    break;
                }
                pairs.push(LinkPair {
                    move1: i,
                    move2: j,
                    selected: false,
                });
            }
        }

        debug!(
            "Generated {} link pairs for {} moves (max diagonal {})",
            pairs.len(),
            move_count,
            max_diagonal
        );

        Self {
            move_count,
            max_diagonal,
            pairs,
        }
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn max_diagonal(&self) -> usize {
        self.max_diagonal
    }

    pub fn pairs(&self) -> &[LinkPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn moves(&self) -> Vec<Move> {
        move_sequence(self.move_count)
    }

    fn position(&self, id: LinkId) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&id, LinkPair::id)
            .ok()
    }

    pub fn get(&self, id: LinkId) -> Option<&LinkPair> {
        self.position(id).map(|idx| &self.pairs[idx])
    }

    pub fn contains(&self, id: LinkId) -> bool {
        self.position(id).is_some()
    }

    /// Flips the selection of `id` and returns the new value.
    pub fn toggle(&mut self, id: LinkId) -> LgResult<bool> {
        let idx = self.position(id).ok_or(LinkographError::LinkNotFound {
            move1: id.move1,
            move2: id.move2,
        })?;
        let pair = &mut self.pairs[idx];
        pair.selected = !pair.selected;
        Ok(pair.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_id_parsing() {
        let id: LinkId = "3-7".parse().unwrap();
        assert_eq!(id, LinkId::new(3, 7));
        assert_eq!(id.to_string(), "3-7");

        assert!("3".parse::<LinkId>().is_err());
        assert!("a-b".parse::<LinkId>().is_err());
        assert!("-1-2".parse::<LinkId>().is_err());
    }

    #[test]
    fn test_lookup_follows_catalog_order() {
        let catalog = LinkCatalog::generate(5, usize::MAX);
        for pair in catalog.pairs() {
            assert_eq!(catalog.get(pair.id()), Some(pair));
        }
        assert!(catalog.get(LinkId::new(2, 1)).is_none());
        assert!(catalog.get(LinkId::new(4, 5)).is_none());
    }

    #[test]
    fn test_move_sequence_is_one_based() {
        let moves = move_sequence(3);
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].id, 1);
        assert_eq!(moves[2].name, "Move 3");
    }
}
