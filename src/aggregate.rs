//! Views derived from the catalog's selection state.
//!
//! Both views are recomputed on demand and never cached: they are the payloads
//! handed to the entropy and run-test scorers.

use crate::catalog::LinkCatalog;
use serde::{Deserialize, Serialize};

/// A selected link as sent to the entropy scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub move1: usize,
    pub move2: usize,
}

/// Selected/unselected counts for one diagonal of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTestRow {
    #[serde(skip)]
    pub diagonal_index: usize,
    pub n1: usize,
    pub n2: usize,
    pub run_count: usize,
}

impl RunTestRow {
    pub fn new(diagonal_index: usize, n1: usize, n2: usize) -> Self {
        Self {
            diagonal_index,
            n1,
            n2,
            run_count: simplified_run_count(n1, n2),
        }
    }

    pub fn total(&self) -> usize {
        self.n1 + self.n2
    }
}

/// Two runs when a diagonal mixes selected and unselected pairs, one otherwise.
///
/// This is not a run-length count over the ordered diagonal; the run-test
/// scorer is calibrated against exactly this rule.
pub fn simplified_run_count(n1: usize, n2: usize) -> usize {
    if n1 > 0 && n2 > 0 {
        2
    } else {
        1
    }
}

pub fn selected_links(catalog: &LinkCatalog) -> Vec<LinkRef> {
    catalog
        .pairs()
        .iter()
        .filter(|p| p.selected)
        .map(|p| LinkRef {
            move1: p.move1,
            move2: p.move2,
        })
        .collect()
}

/// One row per diagonal index that has at least one pair, ascending.
pub fn run_test_rows(catalog: &LinkCatalog) -> Vec<RunTestRow> {
    // (selected, unselected) per diagonal
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for pair in catalog.pairs() {
        let d = pair.diagonal_index();
        if counts.len() <= d {
            counts.resize(d + 1, (0, 0));
        }
        if pair.selected {
            counts[d].0 += 1;
        } else {
            counts[d].1 += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .filter(|(_, (n1, n2))| n1 + n2 > 0)
        .map(|(d, (n1, n2))| RunTestRow::new(d, n1, n2))
        .collect()
}
