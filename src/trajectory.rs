//! Recorded positions of every body, one entry per simulation frame.
//!
//! Frame 0 is the configured initial state; frame `k` is the state after
//! `k` integration steps. Consumers (renderers, exporters) only read.

use bevy::math::DVec2;
use bevy::prelude::Resource;

/// Per-body, append-only position history.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct TrajectoryHistory {
    names: Vec<String>,
    paths: Vec<Vec<DVec2>>,
}

impl TrajectoryHistory {
    /// Start a history from the initial positions (frame 0).
    pub(crate) fn with_initial<'a>(
        bodies: impl IntoIterator<Item = (&'a str, DVec2)>,
        capacity: usize,
    ) -> Self {
        let (names, paths) = bodies
            .into_iter()
            .map(|(name, pos)| {
                let mut path = Vec::with_capacity(capacity);
                path.push(pos);
                (name.to_owned(), path)
            })
            .unzip();
        Self { names, paths }
    }

    /// Append one frame. `positions` must be in body-index order.
    pub(crate) fn record(&mut self, positions: impl IntoIterator<Item = DVec2>) {
        for (path, pos) in self.paths.iter_mut().zip(positions) {
            path.push(pos);
        }
    }

    /// Number of bodies tracked.
    pub fn body_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of recorded frames (steps taken + 1), or 0 with no bodies.
    pub fn frame_count(&self) -> usize {
        self.paths.first().map_or(0, Vec::len)
    }

    /// Display names, indexed like the bodies.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Full path of one body.
    pub fn body(&self, index: usize) -> Option<&[DVec2]> {
        self.paths.get(index).map(Vec::as_slice)
    }

    /// Position of `index` at `frame`.
    pub fn position(&self, index: usize, frame: usize) -> Option<DVec2> {
        self.paths.get(index)?.get(frame).copied()
    }

    /// Positions of all bodies at `frame`.
    pub fn frame(&self, frame: usize) -> Option<Vec<DVec2>> {
        if frame >= self.frame_count() {
            return None;
        }
        Some(self.paths.iter().map(|path| path[frame]).collect())
    }

    /// Most recently recorded position of a body.
    pub fn latest(&self, index: usize) -> Option<DVec2> {
        self.paths.get(index)?.last().copied()
    }

    /// Up to `length` positions of `index` ending at `frame` inclusive.
    ///
    /// Frames past the end are clamped to the last recorded frame. Returns
    /// an empty slice for an unknown body or `length == 0`.
    pub fn trail(&self, index: usize, frame: usize, length: usize) -> &[DVec2] {
        let Some(path) = self.paths.get(index) else {
            return &[];
        };
        if path.is_empty() {
            return &[];
        }
        let end = frame.min(path.len() - 1) + 1;
        let start = end.saturating_sub(length);
        &path[start..end]
    }

    /// Iterate `(name, path)` pairs in body-index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DVec2])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.paths.iter().map(Vec::as_slice))
    }
}
