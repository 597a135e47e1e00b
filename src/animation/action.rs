use serde::{Deserialize, Serialize};

/// How a playback channel treats the end of its animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopMode {
    /// Restart from the beginning when the end is reached.
    Loop,
    /// Play once and report completion.
    #[default]
    DontLoop,
    /// Play repeatedly without reporting completion. The shared clock wraps
    /// to the start at the boundary, as with [`LoopMode::Loop`].
    Cycle,
}

/// Linear cross-fade from the previously playing animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossFade {
    /// Animation being faded out
    pub from: String,
    /// Time the outgoing animation was frozen at
    pub from_time: f32,
    /// Total fade length in seconds
    pub duration: f32,
    /// Fade progress in seconds
    pub elapsed: f32,
}

impl CrossFade {
    /// Weight of the incoming animation in `[0, 1]`.
    #[must_use]
    pub fn weight(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Per-track playback state.
///
/// A channel never runs its own clock: the owning animator pushes the
/// shared time in with [`set_time`](Self::set_time) every frame. `speed` is
/// recorded for inspection and is forced to zero by the animator once time is
/// being pushed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackChannel {
    animation: Option<String>,
    duration: f32,

    pub time: f32,
    pub speed: f32,
    pub loop_mode: LoopMode,

    fade: Option<CrossFade>,
}

impl PlaybackChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the animation currently bound to this channel.
    #[must_use]
    pub fn animation_name(&self) -> Option<&str> {
        self.animation.as_deref()
    }

    /// Length of the bound animation in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Switches to `name` instantly.
    pub fn set_anim(&mut self, name: &str, duration: f32) {
        self.animation = Some(name.to_owned());
        self.duration = duration.max(0.0);
        self.time = 0.0;
        self.fade = None;
    }

    /// Switches to `name`, cross-fading from the current animation over
    /// `blend_time` seconds. Falls back to an instant switch when there is
    /// nothing to fade from.
    pub fn set_anim_blended(&mut self, name: &str, duration: f32, blend_time: f32) {
        let previous = self.animation.take().map(|from| CrossFade {
            from,
            from_time: self.time,
            duration: blend_time,
            elapsed: 0.0,
        });
        self.set_anim(name, duration);
        if blend_time > 0.0 {
            self.fade = previous;
        }
    }

    /// Sets the playback position, clamped to the animation length.
    pub fn set_time(&mut self, time: f32) {
        self.time = time.clamp(0.0, self.duration);
    }

    /// Advances the cross-fade (if any) by the raw frame delta.
    pub fn advance_blend(&mut self, dt: f32) {
        if let Some(fade) = &mut self.fade {
            fade.elapsed += dt;
            if fade.is_finished() {
                self.fade = None;
            }
        }
    }

    /// The in-progress cross-fade, if any.
    #[must_use]
    pub fn cross_fade(&self) -> Option<&CrossFade> {
        self.fade.as_ref()
    }

    /// Weight of the current animation (1.0 when not fading).
    #[must_use]
    pub fn blend_weight(&self) -> f32 {
        self.fade.as_ref().map_or(1.0, CrossFade::weight)
    }
}
