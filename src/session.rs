//! Scripted, fixed-rate page sessions.
//!
//! A [`ScrollScript`] is a timeline of host events. [`run_script`] replays it against a freshly
//! mounted [`PageView`] and captures one [`PageFrame`] per tick, which makes whole sessions
//! reproducible and easy to snapshot.

use std::path::Path;

use anyhow::Context;

use crate::config::PageConfig;
use crate::foundation::error::{PageError, PageResult};
use crate::frame::PageFrame;
use crate::page::{MAX_FRAME_DELTA_SECS, PageEvent, PageView};

/// Upper bound on the steps a script may run: captured frames, or 40 ms page ticks when the
/// frame rate is below 25 fps. About 4.6 hours at 60 fps.
pub const MAX_SCRIPT_STEPS: u64 = 1_000_000;

/// A host event scheduled at `at` seconds into the session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    pub at: f64,
    pub event: PageEvent,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrollScript {
    pub fps: f64,
    pub duration_secs: f64,
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

impl ScrollScript {
    pub fn from_json_str(s: &str) -> PageResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_json_file(path: &Path) -> PageResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> PageResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(PageError::validation("script fps must be finite and > 0"));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            return Err(PageError::validation(
                "script duration_secs must be finite and >= 0",
            ));
        }
        let steps = self.duration_secs * self.fps.max(1.0 / MAX_FRAME_DELTA_SECS);
        if !(steps.is_finite() && steps <= MAX_SCRIPT_STEPS as f64) {
            return Err(PageError::validation(format!(
                "script is too long: {} s at {} fps exceeds {MAX_SCRIPT_STEPS} steps",
                self.duration_secs, self.fps
            )));
        }
        let mut prev = 0.0;
        for (i, e) in self.events.iter().enumerate() {
            if !(e.at.is_finite() && e.at >= 0.0) {
                return Err(PageError::validation(format!(
                    "event {i} time must be finite and >= 0"
                )));
            }
            if e.at < prev {
                return Err(PageError::validation(format!(
                    "event {i} is out of order ({} < {prev})",
                    e.at
                )));
            }
            prev = e.at;
        }
        Ok(())
    }

    /// Frames captured by [`run_script`]: frame 0 at `t = 0`, then one per `1 / fps`.
    ///
    /// Saturates at `MAX_SCRIPT_STEPS + 1` for scripts that would fail [`ScrollScript::validate`].
    pub fn frame_count(&self) -> usize {
        let frames = (self.duration_secs * self.fps).floor();
        let frames = if frames.is_nan() || frames < 0.0 {
            0
        } else {
            frames.min(MAX_SCRIPT_STEPS as f64) as u64
        };
        usize::try_from(frames).map_or(usize::MAX, |n| n.saturating_add(1))
    }
}

/// Mount a page, replay `script`, and return the captured frames.
///
/// Frame `i` is captured at `t = i / fps` after every event with `at <= t` has been handled.
#[tracing::instrument(skip(config, script), fields(fps = script.fps, duration = script.duration_secs))]
pub fn run_script(config: PageConfig, script: &ScrollScript) -> PageResult<Vec<PageFrame>> {
    script.validate()?;
    let mut page = PageView::new(config)?;
    page.mount();

    // Frame intervals longer than one page tick are split, so low rates still play in real time.
    let interval = 1.0 / script.fps;
    let substeps = (interval / MAX_FRAME_DELTA_SECS).ceil().max(1.0) as u32;
    let dt = interval / f64::from(substeps);
    let count = script.frame_count();
    let mut frames = Vec::with_capacity(count);
    let mut pending = script.events.iter().peekable();

    for i in 0..count {
        if i > 0 {
            for _ in 0..substeps {
                page.tick(dt);
            }
        }
        let t = i as f64 / script.fps;
        while let Some(e) = pending.next_if(|e| e.at <= t) {
            let effect = page.handle(e.event.clone());
            tracing::trace!(at = e.at, ?effect, "scripted event");
        }
        frames.push(page.frame());
    }

    let released = page.unmount();
    tracing::debug!(frames = frames.len(), released, "session finished");
    Ok(frames)
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
