//! Frame cursor over a recorded trajectory.
//!
//! Renderers read `history.frame(playback.frame)` (or a trail ending at it)
//! each update. Display styling and trail length are the consumer's business.

use bevy::prelude::*;

use crate::trajectory::TrajectoryHistory;

/// Plugin providing frame advancement over a [`TrajectoryHistory`].
pub struct PlaybackPlugin;

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Playback>()
            .add_systems(Update, advance_playback.in_set(PlaybackSystems));
    }
}

/// System set containing the frame advance.
///
/// Consumers reading `Playback::frame` in `Update` should run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackSystems;

/// Playback state for the recorded trajectory.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Playback {
    /// Frame index currently shown
    pub frame: usize,
    /// Frames advanced per app update
    pub frames_per_update: usize,
    /// Whether playback is paused
    pub paused: bool,
    /// Wrap to frame 0 after the last frame instead of stopping
    pub looping: bool,
    /// Index of the last frame, set once a history is available
    last_frame: Option<usize>,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            frame: 0,
            frames_per_update: 1,
            paused: false,
            looping: false,
            last_frame: None,
        }
    }
}

impl Playback {
    /// True once a non-looping playback has shown the last frame.
    pub fn finished(&self) -> bool {
        !self.looping && self.last_frame.is_some_and(|last| self.frame >= last)
    }

    /// Jump back to the first frame.
    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// Advance the cursor by `frames_per_update` within `frame_count` frames.
    ///
    /// The first call only latches the frame count, so frame 0 is shown
    /// for one update before playback moves on.
    pub fn advance(&mut self, frame_count: usize) {
        if frame_count == 0 {
            return;
        }
        let last = frame_count - 1;
        if self.last_frame.replace(last).is_none() || self.paused {
            return;
        }

        let next = self.frame + self.frames_per_update;
        self.frame = if next <= last {
            next
        } else if self.looping {
            next % frame_count
        } else {
            last
        };
    }
}

/// Advance the playback cursor once per update.
///
/// Waits until a [`TrajectoryHistory`] resource exists.
fn advance_playback(mut playback: ResMut<Playback>, history: Option<Res<TrajectoryHistory>>) {
    if let Some(history) = history {
        playback.advance(history.frame_count());
    }
}
