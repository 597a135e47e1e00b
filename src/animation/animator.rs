use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::animation::action::LoopMode;
use crate::animation::listener::AnimationListener;
use crate::animation::source::{AnimationSource, CharacterHierarchy};
use crate::animation::track::{AnimationTrack, TrackKey};
use crate::errors::{MarionetteError, Result};

/// Drives every animated sub-mesh of a composite character in lockstep.
///
/// One track is created per sub-mesh that exposes an animation source. All
/// tracks share a single logical clock: each [`update`](Self::update) pushes
/// the same elapsed time into every channel, so a body and an attached cape
/// never drift apart.
///
/// # Cycle detection
///
/// The completion check runs *before* the clock advances, so a cycle that
/// ends during tick `n` is reported at the start of tick `n + 1`. A cycle is
/// complete once the elapsed time strictly exceeds the cycle duration.
/// Zero-length cycles (no track knows the animation) never complete.
pub struct CharacterAnimator {
    tracks: SlotMap<TrackKey, AnimationTrack>,
    lookup: FxHashMap<String, TrackKey>,

    listener: Option<Box<dyn AnimationListener>>,

    animation_name: Option<String>,
    speed_multiplier: f32,
    loop_mode: LoopMode,
    elapsed: f32,
    cycle_duration: f32,
}

impl CharacterAnimator {
    /// Discovers the animated sub-meshes of `character` and creates a
    /// playback track for each one.
    pub fn new<H>(character: &H) -> Self
    where
        H: CharacterHierarchy + ?Sized,
    {
        let mut animator = Self {
            tracks: SlotMap::with_key(),
            lookup: FxHashMap::default(),
            listener: None,
            animation_name: None,
            speed_multiplier: 0.0,
            loop_mode: LoopMode::DontLoop,
            elapsed: 0.0,
            cycle_duration: 0.0,
        };

        character.visit_depth_first(&mut |name: &str, source: Option<Arc<dyn AnimationSource>>| {
            if let Some(source) = source {
                animator.add_track(name, source);
            }
        });

        log::debug!("Character animator created with {} track(s)", animator.tracks.len());
        animator
    }

    fn add_track(&mut self, name: &str, source: Arc<dyn AnimationSource>) {
        if self.lookup.contains_key(name) {
            log::warn!("Duplicate animated sub-mesh name '{name}', keeping the first one");
            return;
        }
        log::debug!("Tracking '{name}' ({} animation(s))", source.animation_names().len());
        let key = self.tracks.insert(AnimationTrack::new(name, source));
        self.lookup.insert(name.to_owned(), key);
    }

    // ========================================================================
    // Listener
    // ========================================================================

    /// Registers the listener notified by [`update`](Self::update).
    pub fn set_listener(&mut self, listener: impl AnimationListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    // ========================================================================
    // Playback
    // ========================================================================

    /// Plays `name` on every track whose source contains it.
    ///
    /// Tracks lacking `name` keep their previous channel state. The shared
    /// clock restarts at zero and the cycle duration becomes the longest
    /// duration among the matching tracks (zero if none match). A non-zero
    /// `blend_time` cross-fades from each track's current animation.
    pub fn animate(&mut self, name: &str, speed_multiplier: f32, blend_time: f32, loop_mode: LoopMode) {
        self.animation_name = Some(name.to_owned());
        self.speed_multiplier = speed_multiplier;
        self.loop_mode = loop_mode;
        self.elapsed = 0.0;
        self.cycle_duration = 0.0;

        let mut matched = 0usize;
        for track in self.tracks.values_mut() {
            let Some(duration) = track.duration(name) else {
                continue;
            };

            let channel = track.channel_mut();
            if blend_time > 0.0 {
                channel.set_anim_blended(name, duration, blend_time);
            } else {
                channel.set_anim(name, duration);
            }
            channel.loop_mode = loop_mode;
            channel.speed = speed_multiplier;

            self.cycle_duration = self.cycle_duration.max(duration);
            matched += 1;
        }

        if matched == 0 {
            log::warn!("Animation '{name}' not found on any track, cycle will never complete");
        } else {
            log::debug!(
                "Animating '{name}' on {matched}/{} track(s), cycle {:.3}s, speed {speed_multiplier}",
                self.tracks.len(),
                self.cycle_duration
            );
        }
    }

    /// Advances the shared clock, notifying the registered listener when a
    /// non-looping cycle completes.
    ///
    /// Fails with [`MarionetteError::ListenerNotRegistered`] if a completion
    /// has to be reported and no listener is registered. Listener errors are
    /// returned after the frame has been applied, so the completed cycle is
    /// not reported again on the next update.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        self.tick(dt, Self::notify_registered)
    }

    /// Like [`update`](Self::update), but reports completions to `listener`
    /// instead of the registered one.
    pub fn update_with(&mut self, dt: f32, listener: &mut dyn AnimationListener) -> Result<()> {
        self.tick(dt, |animator, name| listener.on_anim_cycle_done(animator, name))
    }

    fn notify_registered(&mut self, name: &str) -> Result<()> {
        let mut listener = self.listener.take().ok_or_else(|| MarionetteError::ListenerNotRegistered {
            animation: self.animation_name.clone(),
        })?;
        let result = listener.on_anim_cycle_done(self, name);
        // The callback may have installed a replacement.
        if self.listener.is_none() {
            self.listener = Some(listener);
        }
        result
    }

    fn tick<F>(&mut self, dt: f32, notify: F) -> Result<()>
    where
        F: FnOnce(&mut Self, &str) -> Result<()>,
    {
        // 1. Detect a cycle boundary crossed on a previous tick. A failed
        //    notification still consumes the boundary; it is never reported twice.
        let mut outcome = Ok(());
        if self.cycle_duration > 0.0 && self.elapsed > 0.0 && self.elapsed > self.cycle_duration {
            if self.loop_mode == LoopMode::DontLoop {
                self.speed_multiplier = 0.0;
                let name = self.animation_name.clone().unwrap_or_default();
                outcome = notify(self, &name);
            }
            self.elapsed = 0.0;
        }

        // 2. Advance the shared clock
        self.elapsed += self.speed_multiplier * dt;

        // 3. Push time into every track
        for track in self.tracks.values_mut() {
            let channel = track.channel_mut();
            channel.speed = 0.0;
            channel.set_time(self.elapsed);
            channel.advance_blend(dt);
        }

        outcome
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The logical animation set by the last [`animate`](Self::animate).
    #[inline]
    #[must_use]
    pub fn animation_name(&self) -> Option<&str> {
        self.animation_name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    #[inline]
    #[must_use]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    #[inline]
    #[must_use]
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub fn cycle_duration(&self) -> f32 {
        self.cycle_duration
    }

    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Names of the sub-meshes that carry animation.
    pub fn track_names(&self) -> impl Iterator<Item = &str> {
        self.lookup.keys().map(String::as_str)
    }

    #[must_use]
    pub fn track(&self, name: &str) -> Option<&AnimationTrack> {
        self.lookup.get(name).and_then(|&key| self.tracks.get(key))
    }

    pub fn tracks(&self) -> impl Iterator<Item = &AnimationTrack> {
        self.tracks.values()
    }

    /// Every animation name known to any track, sorted and de-duplicated.
    #[must_use]
    pub fn animation_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .tracks
            .values()
            .flat_map(|track| track.source().animation_names())
            .collect();
        names.into_iter().map(str::to_owned).collect()
    }
}

impl fmt::Debug for CharacterAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterAnimator")
            .field("tracks", &self.tracks.len())
            .field("animation_name", &self.animation_name)
            .field("speed_multiplier", &self.speed_multiplier)
            .field("loop_mode", &self.loop_mode)
            .field("elapsed", &self.elapsed)
            .field("cycle_duration", &self.cycle_duration)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
