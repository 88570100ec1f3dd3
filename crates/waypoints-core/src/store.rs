//! The waypoint store: user markers with proximity deletion and persistence.

use crate::codec;
use crate::config::StoreConfig;
use crate::coord::{ProjectedCoord, ScreenPoint, ScreenTransform, Viewport};
use crate::marker::Marker;
use crate::render::{DrawCommand, MarkerCanvas, MarkerStyle};
use crate::storage::{FileStorage, MarkerStorage, StorageResult};

/// Persisted collection of map markers.
///
/// Markers are kept in insertion order. Deletions tombstone entries instead
/// of removing them, so the backing sequence only grows until
/// [`delete_all`](Self::delete_all) or a restore replaces it.
///
/// Nothing is saved implicitly: the owner calls [`persist`](Self::persist)
/// before tearing the store down.
#[derive(Debug)]
pub struct WaypointStore<S: MarkerStorage = FileStorage> {
    storage: S,
    markers: Vec<Marker>,
    style: MarkerStyle,
}

impl WaypointStore<FileStorage> {
    /// Open the store described by `config`, restoring any saved markers.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self::open(config.storage()).with_style(config.style)
    }
}

impl<S: MarkerStorage> WaypointStore<S> {
    /// Create a store on `storage` and restore from it.
    ///
    /// A missing, unreadable or corrupt file yields an empty store. The
    /// markers in a corrupt file are lost once the store is persisted again.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            markers: Vec::new(),
            style: MarkerStyle::default(),
        };
        store.restore();
        store
    }

    /// Replace the render style.
    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reload markers from storage, discarding the current ones.
    ///
    /// Failures are logged and leave the store empty.
    pub fn restore(&mut self) {
        if let Err(e) = self.try_restore() {
            log::warn!("Discarding markers from {}: {}", self.storage.describe(), e);
        }
    }

    /// Reload markers from storage, reporting why a restore failed.
    ///
    /// The store is empty after an error; a partially parsed file is never
    /// kept. Returns the number of markers restored.
    pub fn try_restore(&mut self) -> StorageResult<usize> {
        self.markers = Vec::new();

        let Some(text) = self.storage.load()? else {
            log::info!("No saved markers at {}", self.storage.describe());
            return Ok(0);
        };

        let positions = codec::decode(&text)?;
        self.markers = positions.into_iter().map(Marker::new).collect();
        log::debug!("Restored {} markers from {}", self.markers.len(), self.storage.describe());
        Ok(self.markers.len())
    }

    /// Save all live markers. Failures are logged and otherwise ignored.
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            log::warn!("Failed to save markers to {}: {}", self.storage.describe(), e);
        }
    }

    /// Save all live markers, returning how many were written.
    pub fn try_persist(&self) -> StorageResult<usize> {
        let live: Vec<ProjectedCoord> = self.live_markers().collect();
        let count = live.len();
        self.storage.save(&codec::encode(live))?;
        log::debug!("Saved {} markers to {}", count, self.storage.describe());
        Ok(count)
    }

    /// Append a live marker. No deduplication.
    pub fn add(&mut self, position: ProjectedCoord) {
        self.markers.push(Marker::new(position));
    }

    /// Delete the live marker closest to `query` in screen space.
    ///
    /// Distance is Manhattan over the shifted deltas. Among equally close
    /// markers the earliest added one goes. Returns false if there are no
    /// live markers.
    pub fn delete_nearest(&mut self, query: ProjectedCoord, shift: u32) -> bool {
        let transform = ScreenTransform::new(query, shift);
        let victim = self
            .markers
            .iter_mut()
            .filter(|m| m.is_alive())
            .min_by_key(|m| transform.manhattan(m.position()));

        match victim {
            Some(marker) => {
                marker.kill();
                true
            }
            None => false,
        }
    }

    /// Delete every live marker strictly inside the viewport centered on
    /// `query`. Returns true if anything was deleted.
    pub fn delete_visible(
        &mut self,
        query: ProjectedCoord,
        shift: u32,
        viewport: Viewport,
    ) -> bool {
        let transform = ScreenTransform::new(query, shift);
        let mut deleted = 0usize;
        for marker in self.markers.iter_mut().filter(|m| m.is_alive()) {
            if transform.is_inside(marker.position(), viewport) {
                marker.kill();
                deleted += 1;
            }
        }
        if deleted > 0 {
            log::debug!("Deleted {} visible markers", deleted);
        }
        deleted > 0
    }

    /// Drop every marker, live or dead. Storage is untouched until the next
    /// persist.
    pub fn delete_all(&mut self) {
        self.markers = Vec::new();
    }

    /// Positions of live markers in insertion order.
    pub fn live_markers(&self) -> impl ExactSizeIterator<Item = ProjectedCoord> + '_ {
        LiveMarkers {
            inner: self.markers.iter(),
            remaining: self.live_count(),
        }
    }

    /// Number of live markers.
    pub fn live_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_alive()).count()
    }

    /// Length of the backing sequence, tombstones included.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True when the backing sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// True when at least one marker is still alive.
    pub fn has_live(&self) -> bool {
        self.markers.iter().any(Marker::is_alive)
    }

    /// Screen positions of live markers with `center` at the middle of
    /// `viewport`.
    ///
    /// Lazy and read-only; call again for a fresh pass.
    pub fn screen_positions(
        &self,
        center: ProjectedCoord,
        shift: u32,
        viewport: Viewport,
    ) -> impl Iterator<Item = ScreenPoint> + '_ {
        let transform = ScreenTransform::new(center, shift);
        self.live_markers().map(move |p| transform.to_screen(p, viewport))
    }

    /// Paint every live marker onto `canvas`.
    pub fn draw<C: MarkerCanvas + ?Sized>(
        &self,
        canvas: &mut C,
        center: ProjectedCoord,
        shift: u32,
        viewport: Viewport,
    ) {
        for point in self.screen_positions(center, shift, viewport) {
            canvas.draw_marker(&DrawCommand {
                center: point,
                style: self.style,
            });
        }
    }
}

/// Iterator over live marker positions.
struct LiveMarkers<'a> {
    inner: std::slice::Iter<'a, Marker>,
    remaining: usize,
}

impl Iterator for LiveMarkers<'_> {
    type Item = ProjectedCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let marker = self.inner.find(|m| m.is_alive())?;
        self.remaining -= 1;
        Some(marker.position())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LiveMarkers<'_> {}
