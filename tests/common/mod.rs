#![allow(dead_code)]

use linkograph::catalog::{LinkCatalog, LinkId};
use linkograph::geometry::LatticeGeometry;
use linkograph::session::Session;

/// The four-move lattice with every pair eligible.
pub fn four_move_catalog() -> LinkCatalog {
    LinkCatalog::generate(4, usize::MAX)
}

pub fn session_with(move_count: usize, selected: &[(usize, usize)]) -> Session {
    let mut session = Session::with_moves(LatticeGeometry::unbounded(), move_count)
        .expect("unbounded geometry is always valid");
    for &(a, b) in selected {
        session
            .toggle(LinkId::new(a, b))
            .expect("fixture link must exist");
    }
    session
}

pub fn ids(catalog: &LinkCatalog) -> Vec<(usize, usize)> {
    catalog
        .pairs()
        .iter()
        .map(|p| (p.move1, p.move2))
        .collect()
}
