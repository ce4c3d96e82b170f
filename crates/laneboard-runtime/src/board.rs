use std::collections::HashMap;
use std::sync::Arc;

use futures::future;
use tokio::sync::watch;

use laneboard_engine::aggregate_records;
use laneboard_types::{BoardSessionData, BrushCriterion, SessionRef, ZoomLevel};

use crate::source::MessageSource;
use crate::{Error, Result};

/// The single shared highlight criterion, broadcast to every lane.
///
/// Lanes subscribe once and recompute their own active set when the value
/// changes; nothing iterates over unrendered lanes. `set` replaces whatever
/// was active (last writer wins, no priority stack) and `clear` is always
/// unconditional, so rapid hover transitions may flicker — sequencing is
/// the caller's job.
pub struct BrushCoordinator {
    tx: watch::Sender<Option<BrushCriterion>>,
}

impl Default for BrushCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl BrushCoordinator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn set(&self, criterion: BrushCriterion) {
        let _ = self.tx.send(Some(criterion));
    }

    pub fn clear(&self) {
        let _ = self.tx.send(None);
    }

    pub fn active(&self) -> Option<BrushCriterion> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<BrushCriterion>> {
        self.tx.subscribe()
    }
}

/// Read-only view handed to rendering layers. Session data is Arc-shared,
/// so taking a snapshot per frame stays cheap.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub sessions: HashMap<String, Arc<BoardSessionData>>,
    pub visible_ids: Vec<String>,
    pub loading: bool,
    pub zoom: ZoomLevel,
    pub brush: Option<BrushCriterion>,
}

impl BoardSnapshot {
    pub fn session(&self, id: &str) -> Option<&Arc<BoardSessionData>> {
        self.sessions.get(id)
    }
}

/// Single-owner board state. Mutated only by whole-value replacement — the
/// mapping and order list swap atomically on load and reset, never patch in
/// place.
pub struct BoardState {
    sessions: HashMap<String, Arc<BoardSessionData>>,
    visible_ids: Vec<String>,
    loading: bool,
    zoom: ZoomLevel,
    brush: BrushCoordinator,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            visible_ids: Vec::new(),
            loading: false,
            zoom: ZoomLevel::default(),
            brush: BrushCoordinator::new(),
        }
    }

    /// Load a batch of sessions, replacing the board contents wholesale.
    ///
    /// One fetch per session runs concurrently; all of them join before any
    /// state update. A failed fetch is logged and its session excluded —
    /// survivors keep the requested relative order regardless of completion
    /// order. If every fetch of a non-empty batch fails the prior board
    /// state is left untouched. The loading flag clears exactly once on
    /// every path. Starting a second batch before the first settles is
    /// unguarded; there are no timeouts and no cancellation.
    pub async fn load_sessions<S: MessageSource>(&mut self, source: &S, refs: &[SessionRef]) {
        self.loading = true;
        match fetch_batch(source, refs).await {
            Ok((sessions, visible_ids)) => {
                self.sessions = sessions;
                self.visible_ids = visible_ids;
            }
            Err(err) => {
                eprintln!("laneboard: board load failed: {err}");
            }
        }
        self.loading = false;
    }

    /// Row-size estimates only; data and ordering never change.
    pub fn set_zoom(&mut self, zoom: ZoomLevel) {
        self.zoom = zoom;
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn brush(&self) -> &BrushCoordinator {
        &self.brush
    }

    /// Reset everything to the initial defaults: empty mapping and order
    /// list, loading false, default zoom, no brush.
    pub fn clear_board(&mut self) {
        self.sessions = HashMap::new();
        self.visible_ids = Vec::new();
        self.loading = false;
        self.zoom = ZoomLevel::default();
        self.brush.clear();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            sessions: self.sessions.clone(),
            visible_ids: self.visible_ids.clone(),
            loading: self.loading,
            zoom: self.zoom,
            brush: self.brush.active(),
        }
    }
}

type LoadedBatch = (HashMap<String, Arc<BoardSessionData>>, Vec<String>);

async fn fetch_batch<S: MessageSource>(source: &S, refs: &[SessionRef]) -> Result<LoadedBatch> {
    let fetches = refs.iter().map(|session| async move {
        match source.fetch_messages(session).await {
            Ok(records) => Some((session.clone(), records)),
            Err(err) => {
                eprintln!("laneboard: failed to load session {}: {err}", session.id);
                None
            }
        }
    });

    // join_all preserves input order, so survivors come out in the
    // originally requested order no matter which fetch finished first.
    let results = future::join_all(fetches).await;

    let mut sessions = HashMap::new();
    let mut visible_ids = Vec::new();
    for (session, records) in results.into_iter().flatten() {
        let stats = aggregate_records(&records);
        visible_ids.push(session.id.clone());
        sessions.insert(
            session.id.clone(),
            Arc::new(BoardSessionData {
                session,
                records,
                stats,
            }),
        );
    }

    if !refs.is_empty() && visible_ids.is_empty() {
        return Err(Error::InvalidOperation(format!(
            "all {} session fetches failed",
            refs.len()
        )));
    }

    Ok((sessions, visible_ids))
}
