use crate::error::{LgResult, LinkographError};
use clap::Args;
use serde::{Deserialize, Serialize};

const EXACT_DIAGONAL_LIMIT: f64 = (1u64 << 53) as f64;

/// Canvas geometry of the link lattice as drawn by the analyst's front end.
///
/// Link nodes hang below the move timeline on diagonals; a node at diagonal
/// index `d` sits at depth `padding + (d + 1) * diagonal_spacing`. Nodes that
/// would reach the bottom margin are never generated, which is where the
/// catalog's `max_diagonal` bound comes from.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeGeometry {
    #[arg(long, default_value_t = 1900.0)]
    pub canvas_height: f64,
    #[arg(long, default_value_t = 40.0)]
    pub canvas_padding: f64,
    #[arg(long, default_value_t = 30.0)]
    pub diagonal_spacing: f64,

    /// Explicit diagonal bound; overrides the canvas-derived one.
    #[arg(long)]
    pub max_diagonal: Option<usize>,
}

impl Default for LatticeGeometry {
    fn default() -> Self {
        Self {
            canvas_height: 1900.0,
            canvas_padding: 40.0,
            diagonal_spacing: 30.0,
            max_diagonal: None,
        }
    }
}

impl LatticeGeometry {
    /// Geometry with no canvas limit: every pair is eligible.
    pub fn unbounded() -> Self {
        Self {
            max_diagonal: Some(usize::MAX),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> LgResult<()> {
        if self.max_diagonal.is_some() {
            return Ok(());
        }
        if !(self.diagonal_spacing.is_finite() && self.diagonal_spacing > 0.0) {
            return Err(LinkographError::Config(format!(
                "diagonal_spacing must be a positive number, got {}",
                self.diagonal_spacing
            )));
        }
        if !self.canvas_height.is_finite() || !self.canvas_padding.is_finite() {
            return Err(LinkographError::Config(
                "canvas_height and canvas_padding must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Vertical position of the far end of a link's diagonal.
    pub fn depth(&self, diagonal_index: usize) -> f64 {
        self.canvas_padding + (diagonal_index as f64 + 1.0) * self.diagonal_spacing
    }

    fn floor(&self) -> f64 {
        self.canvas_height - self.canvas_padding
    }

    /// First diagonal index whose depth reaches the bottom margin.
    ///
    /// Pairs with `diagonal_index < max_diagonal()` are eligible.
    pub fn max_diagonal(&self) -> LgResult<usize> {
        if let Some(d) = self.max_diagonal {
            return Ok(d);
        }
        self.validate()?;

        let floor = self.floor();
        let span = floor - self.depth(0);
        if span < 0.0 {
            return Ok(0);
        }

        // Past 2^53 single diagonals are no longer distinguishable in f64;
        // such a canvas bounds nothing.
        let estimate = (span / self.diagonal_spacing).floor();
        if estimate >= EXACT_DIAGONAL_LIMIT {
            return Ok(usize::MAX);
        }

        // Settle on the exact boundary against `depth` itself.
        let mut d = estimate as usize;
        while d > 0 && self.depth(d - 1) >= floor {
            d -= 1;
        }
        while self.depth(d) < floor {
            d = match d.checked_add(1) {
                Some(next) => next,
                None => return Ok(usize::MAX),
            };
        }
        Ok(d)
    }
}
