use crate::animation::animator::CharacterAnimator;
use crate::errors::Result;

/// Notified when a non-looping animation cycle completes.
///
/// The callback runs inside [`CharacterAnimator::update`] and receives the
/// animator so it can start the next animation before the tick returns.
pub trait AnimationListener {
    fn on_anim_cycle_done(
        &mut self,
        animator: &mut CharacterAnimator,
        animation_name: &str,
    ) -> Result<()>;
}

impl<F> AnimationListener for F
where
    F: FnMut(&mut CharacterAnimator, &str) -> Result<()>,
{
    fn on_anim_cycle_done(
        &mut self,
        animator: &mut CharacterAnimator,
        animation_name: &str,
    ) -> Result<()> {
        self(animator, animation_name)
    }
}
