use std::collections::VecDeque;

use crate::animation::{AnimationListener, CharacterAnimator, LoopMode};
use crate::errors::Result;
use crate::preview::settings::{PreviewPhase, PreviewSettings};

/// Where the preview sequence currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerState {
    /// Playing the opening rest pose.
    Resting,
    /// Playing the stand pose that follows the opening rest.
    EnteringStand,
    /// Playing a body animation for the `count`-th time in a row.
    Repeating { animation: String, count: u32 },
    /// Playing the stand pose between two body animations.
    ExitingStand,
    /// Playing the closing rest pose.
    RestingFinal,
    /// The sequence is over; further completions are ignored.
    Complete,
}

/// One animation request issued by the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackStep {
    pub animation: String,
    pub phase: PreviewPhase,
    /// Repetition number for body animations, `None` for bookend poses.
    pub repetition: Option<u32>,
}

/// Walks a list of animations through the bookend pattern
/// `Rest → Stand → (A ×N → Stand)… → Rest`, one step per completed cycle.
///
/// The sequencer is an [`AnimationListener`]: every non-looping completion
/// reported by the animator decides the next animation. Decisions follow a
/// fixed priority:
///
/// 1. queue empty and resting → complete
/// 2. resting → stand
/// 3. a body animation finished its repetitions → stand
/// 4. more to play → repeat the animation, or take the next one from the queue
/// 5. otherwise → final rest
#[derive(Debug, Clone)]
pub struct Sequencer {
    settings: PreviewSettings,
    queue: VecDeque<String>,
    repeat_counter: u32,
    state: SequencerState,
    history: Vec<PlaybackStep>,
}

impl Sequencer {
    /// Creates a sequencer for `animations`, skipping the bookend poses.
    pub fn new<I, S>(settings: PreviewSettings, animations: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        settings.validate()?;

        let queue = animations
            .into_iter()
            .map(Into::into)
            .filter(|name| *name != settings.rest_pose && *name != settings.stand_pose)
            .collect();

        Ok(Self {
            settings,
            queue,
            repeat_counter: 0,
            state: SequencerState::Resting,
            history: Vec::new(),
        })
    }

    /// Creates a sequencer for every animation known to `animator`.
    pub fn for_animator(settings: PreviewSettings, animator: &CharacterAnimator) -> Result<Self> {
        Self::new(settings, animator.animation_names())
    }

    /// Starts the sequence with the opening rest pose.
    pub fn start(&mut self, animator: &mut CharacterAnimator) {
        log::info!("Preview queue: {:?}", self.queue);
        self.state = SequencerState::Resting;
        let rest = self.settings.rest_pose.clone();
        self.play(animator, &rest, PreviewPhase::InitialRest, None);
    }

    /// Decides and starts the next animation after `completed` finished.
    pub fn advance(&mut self, animator: &mut CharacterAnimator, completed: &str) {
        if self.state == SequencerState::Complete {
            log::debug!("Ignoring completion of '{completed}', preview already complete");
            return;
        }

        let target = self.settings.repeat_target;
        let resting = animator.animation_name() == Some(self.settings.rest_pose.as_str());

        if self.queue.is_empty() && resting {
            log::info!("Preview complete");
            self.state = SequencerState::Complete;
        } else if resting {
            log::info!("Playing beginning {}", self.settings.stand_pose);
            self.play_stand(animator, PreviewPhase::EnteringStand);
            self.state = SequencerState::EnteringStand;
        } else if completed != self.settings.stand_pose && self.repeat_counter >= target {
            log::info!("Playing intermediate {}", self.settings.stand_pose);
            self.play_stand(animator, PreviewPhase::ExitingStand);
            self.state = SequencerState::ExitingStand;
        } else if !self.queue.is_empty() || self.repeat_counter < target {
            if self.repeat_counter > 0 && self.repeat_counter < target {
                self.repeat_counter += 1;
                log::info!("Playing: {completed} ({}/{target})", self.repeat_counter);
                self.play(animator, completed, PreviewPhase::BodyRepeat, Some(self.repeat_counter));
                self.state = SequencerState::Repeating {
                    animation: completed.to_owned(),
                    count: self.repeat_counter,
                };
            } else {
                self.repeat_counter = 0;
                match self.queue.pop_front() {
                    Some(next) => {
                        self.repeat_counter = 1;
                        log::info!("Playing: {next} (1/{target})");
                        self.play(animator, &next, PreviewPhase::BodyFirst, Some(1));
                        self.state = SequencerState::Repeating {
                            animation: next,
                            count: 1,
                        };
                    }
                    None => self.play_final_rest(animator),
                }
            }
        } else {
            self.play_final_rest(animator);
        }
    }

    fn play_stand(&mut self, animator: &mut CharacterAnimator, phase: PreviewPhase) {
        let stand = self.settings.stand_pose.clone();
        self.play(animator, &stand, phase, None);
    }

    fn play_final_rest(&mut self, animator: &mut CharacterAnimator) {
        log::info!("Playing final {}", self.settings.rest_pose);
        let rest = self.settings.rest_pose.clone();
        self.play(animator, &rest, PreviewPhase::FinalRest, None);
        self.state = SequencerState::RestingFinal;
    }

    fn play(
        &mut self,
        animator: &mut CharacterAnimator,
        animation: &str,
        phase: PreviewPhase,
        repetition: Option<u32>,
    ) {
        let params = self.settings.phases.get(phase);
        animator.animate(animation, params.speed, params.blend_time, LoopMode::DontLoop);
        self.history.push(PlaybackStep {
            animation: animation.to_owned(),
            phase,
            repetition,
        });
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SequencerState::Complete
    }

    #[must_use]
    pub fn repeat_counter(&self) -> u32 {
        self.repeat_counter
    }

    /// Animations not yet taken from the queue, in playing order.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    /// Every animation request issued so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[PlaybackStep] {
        &self.history
    }
}

impl AnimationListener for Sequencer {
    fn on_anim_cycle_done(
        &mut self,
        animator: &mut CharacterAnimator,
        animation_name: &str,
    ) -> Result<()> {
        self.advance(animator, animation_name);
        Ok(())
    }
}
