use crate::aggregate::LinkRef;
use crate::error::{LgResult, LinkographError};
use std::collections::BTreeMap;

/// Number of lattice points for `move_count` moves, ignoring any canvas bound.
pub fn total_points(move_count: usize) -> LgResult<usize> {
    move_count
        .checked_mul(move_count.saturating_sub(1))
        .map(|p| p / 2)
        .ok_or_else(|| {
            LinkographError::Validation(format!("Move count {} is too large", move_count))
        })
}

fn plogp(p: f64) -> f64 {
    -p * p.log2()
}

/// Entropy-style creativity score of a set of links.
///
/// Each diagonal row contributes `-p log2 p` with `p` its share of all lattice
/// points; the unlinked points contribute one more term of the same shape.
pub fn creativity(links: &[LinkRef], move_count: usize) -> LgResult<f64> {
    if links.is_empty() {
        return Err(LinkographError::Validation(
            "No links data provided".to_string(),
        ));
    }
    if move_count < 2 {
        return Err(LinkographError::Validation(
            "The number of moves has not been set yet.".to_string(),
        ));
    }

    let total = total_points(move_count)?;
    // links per diagonal row; rows without links never appear
    let mut row_counts: BTreeMap<usize, usize> = BTreeMap::new();
    for link in links {
        if link.move1 >= link.move2 || link.move2 >= move_count {
            return Err(LinkographError::Validation(format!(
                "Link {}-{} is outside a {}-move lattice",
                link.move1, link.move2, move_count
            )));
        }
        *row_counts.entry(link.move2 - link.move1 - 1).or_default() += 1;
    }

    let total_f = total as f64;
    let mut entropy: f64 = row_counts
        .values()
        .map(|&c| plogp(c as f64 / total_f))
        .sum();

    let empty = total.saturating_sub(links.len());
    if empty > 0 {
        entropy += plogp(empty as f64 / total_f);
    }

    Ok(entropy)
}
