use crate::aggregate::{self, LinkRef, RunTestRow};
use crate::catalog::{LinkCatalog, LinkId};
use crate::error::{LgResult, LinkographError};
use crate::geometry::LatticeGeometry;
use crate::protocol::{
    EntropyRequest, EntropyResponse, RunTestRequest, RunTestResponse, SelectionSync,
};
use crate::scoring::ScoringService;
use tracing::{debug, info, warn};

/// A request stamped with the session generation it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged<T> {
    pub generation: u64,
    pub value: T,
}

/// How a scoring response related to the state it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// The catalog changed while the request was in flight. The result was
    /// still applied.
    Stale { requested: u64, current: u64 },
}

/// Latest scores shown to the analyst.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBoard {
    pub creativity: Option<f64>,
    pub run_test: Option<RunTestResponse>,
}

/// Owns the one live catalog. All selection changes go through [`Session::toggle`]
/// and all regeneration through [`Session::regenerate`].
#[derive(Debug, Clone)]
pub struct Session {
    geometry: LatticeGeometry,
    catalog: LinkCatalog,
    generation: u64,
    scores: ScoreBoard,
}

impl Session {
    pub fn new(geometry: LatticeGeometry) -> LgResult<Self> {
        let max_diagonal = geometry.max_diagonal()?;
        Ok(Self {
            geometry,
            catalog: LinkCatalog::generate(0, max_diagonal),
            generation: 0,
            scores: ScoreBoard::default(),
        })
    }

    pub fn with_moves(geometry: LatticeGeometry, move_count: usize) -> LgResult<Self> {
        let mut session = Self::new(geometry)?;
        session.regenerate(move_count)?;
        Ok(session)
    }

    pub fn geometry(&self) -> &LatticeGeometry {
        &self.geometry
    }

    pub fn catalog(&self) -> &LinkCatalog {
        &self.catalog
    }

    pub fn move_count(&self) -> usize {
        self.catalog.move_count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Replaces the catalog wholesale. Every selection is discarded, including
    /// pairs that exist in both the old and new catalogs.
    pub fn regenerate(&mut self, move_count: usize) -> LgResult<&LinkCatalog> {
        let max_diagonal = self.geometry.max_diagonal()?;
        self.catalog = LinkCatalog::generate(move_count, max_diagonal);
        self.generation += 1;
        info!(
            "Catalog regenerated: {} moves, {} candidate links",
            move_count,
            self.catalog.len()
        );
        Ok(&self.catalog)
    }

    /// Parses a move count typed by the analyst. Anything that is not a
    /// non-negative integer is rejected and the current catalog is kept.
    pub fn regenerate_from_input(&mut self, input: &str) -> LgResult<&LinkCatalog> {
        let trimmed = input.trim();
        let move_count = trimmed
            .parse::<usize>()
            .map_err(|_| LinkographError::InvalidMoveCount(trimmed.to_string()))?;
        self.regenerate(move_count)
    }

    /// Flips one link and returns the sync notice for the persistence side.
    pub fn toggle(&mut self, id: LinkId) -> LgResult<SelectionSync> {
        match self.catalog.toggle(id) {
            Ok(state) => {
                self.generation += 1;
                debug!("Link {} -> {}", id, state);
                Ok(SelectionSync::new(id, state))
            }
            Err(e) => {
                warn!("Toggle ignored: {}", e);
                Err(e)
            }
        }
    }

    pub fn selected_links(&self) -> Vec<LinkRef> {
        aggregate::selected_links(&self.catalog)
    }

    pub fn run_test_rows(&self) -> Vec<RunTestRow> {
        aggregate::run_test_rows(&self.catalog)
    }

    pub fn entropy_request(&self) -> Tagged<EntropyRequest> {
        Tagged {
            generation: self.generation,
            value: EntropyRequest::new(self.selected_links(), self.move_count()),
        }
    }

    pub fn run_test_request(&self) -> Tagged<RunTestRequest> {
        Tagged {
            generation: self.generation,
            value: RunTestRequest::new(self.run_test_rows(), self.move_count()),
        }
    }

    fn freshness(&self, requested: u64) -> Applied {
        if requested == self.generation {
            Applied::Current
        } else {
            warn!(
                "Applying score computed for generation {} onto generation {}",
                requested, self.generation
            );
            Applied::Stale {
                requested,
                current: self.generation,
            }
        }
    }

    /// Shows an entropy result. Failures leave the previous score on display.
    pub fn apply_entropy(
        &mut self,
        requested: u64,
        result: LgResult<EntropyResponse>,
    ) -> LgResult<Applied> {
        let response = result?;
        self.scores.creativity = Some(response.creativity);
        Ok(self.freshness(requested))
    }

    pub fn apply_run_test(
        &mut self,
        requested: u64,
        result: LgResult<RunTestResponse>,
    ) -> LgResult<Applied> {
        let response = result?;
        self.scores.run_test = Some(response);
        Ok(self.freshness(requested))
    }

    /// Snapshot of both scoring requests at the current generation.
    pub fn begin_scoring(&self) -> ScoringRound {
        ScoringRound {
            entropy: self.entropy_request(),
            run_test: self.run_test_request(),
        }
    }

    /// Applies both halves of a finished round. A round begun before the last
    /// toggle or regenerate reports `Applied::Stale`.
    pub fn apply_scores(&mut self, scored: ScoredRound) -> (LgResult<Applied>, LgResult<Applied>) {
        (
            self.apply_entropy(scored.entropy.generation, scored.entropy.value),
            self.apply_run_test(scored.run_test.generation, scored.run_test.value),
        )
    }

    /// Scores the current selection in one round trip.
    ///
    /// The session stays borrowed until both results are applied, so results
    /// from this call are always `Applied::Current`. Callers that keep editing
    /// while a round is in flight use [`Session::begin_scoring`],
    /// [`ScoringRound::send`] and [`Session::apply_scores`] instead.
    pub async fn score<S: ScoringService>(
        &mut self,
        service: &S,
    ) -> (LgResult<Applied>, LgResult<Applied>) {
        let scored = self.begin_scoring().send(service).await;
        self.apply_scores(scored)
    }
}

/// Both scoring requests for one generation, detached from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRound {
    pub entropy: Tagged<EntropyRequest>,
    pub run_test: Tagged<RunTestRequest>,
}

/// Responses of a [`ScoringRound`], still stamped with their generation.
#[derive(Debug)]
pub struct ScoredRound {
    pub entropy: Tagged<LgResult<EntropyResponse>>,
    pub run_test: Tagged<LgResult<RunTestResponse>>,
}

impl ScoringRound {
    /// Sends both requests concurrently.
    pub async fn send<S: ScoringService>(self, service: &S) -> ScoredRound {
        let (entropy, runs) = tokio::join!(
            service.entropy(&self.entropy.value),
            service.run_test(&self.run_test.value)
        );
        ScoredRound {
            entropy: Tagged {
                generation: self.entropy.generation,
                value: entropy,
            },
            run_test: Tagged {
                generation: self.run_test.generation,
                value: runs,
            },
        }
    }
}
