use std::fmt;
use std::sync::Arc;

use slotmap::new_key_type;

use crate::animation::action::PlaybackChannel;
use crate::animation::source::AnimationSource;

new_key_type! {
    pub struct TrackKey;
}

/// Binds one sub-mesh's animation source to its playback channel.
pub struct AnimationTrack {
    name: String,
    source: Arc<dyn AnimationSource>,
    pub(crate) channel: PlaybackChannel,
}

impl AnimationTrack {
    pub fn new(name: impl Into<String>, source: Arc<dyn AnimationSource>) -> Self {
        Self {
            name: name.into(),
            source,
            channel: PlaybackChannel::new(),
        }
    }

    /// Name of the sub-mesh this track is bound to.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn source(&self) -> &Arc<dyn AnimationSource> {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, animation: &str) -> bool {
        self.source.has_animation(animation)
    }

    /// Maximum duration of `animation` on this track.
    #[inline]
    #[must_use]
    pub fn duration(&self, animation: &str) -> Option<f32> {
        self.source.animation_duration(animation)
    }

    #[inline]
    #[must_use]
    pub fn channel(&self) -> &PlaybackChannel {
        &self.channel
    }

    #[inline]
    pub fn channel_mut(&mut self) -> &mut PlaybackChannel {
        &mut self.channel
    }
}

impl fmt::Debug for AnimationTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationTrack")
            .field("name", &self.name)
            .field("animations", &self.source.animation_names())
            .field("channel", &self.channel)
            .finish()
    }
}
