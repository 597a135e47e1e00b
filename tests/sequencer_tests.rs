//! Sequencer Tests
//!
//! Tests for:
//! - Bookend pattern ordering (Rest → Stand → A×N → Stand → … → Rest)
//! - Repeat counting and queue consumption
//! - Termination rules and edge cases
//! - Per-phase speed / blend configuration

use marionette::animation::{AnimationLibrary, CharacterAnimator};
use marionette::errors::MarionetteError;
use marionette::preview::{
    PhaseParams, PlaybackStep, PreviewPhase, PreviewSettings, Sequencer, SequencerState,
};
use marionette::scene::{Character, Node};

fn performer() -> CharacterAnimator {
    let mut character = Character::new("performer");
    character.add_node(Node::animated(
        "body",
        AnimationLibrary::from_clips([("Rest", 1.0), ("Stand", 0.5), ("A", 1.0), ("B", 2.0)]),
    ));
    CharacterAnimator::new(&character)
}

/// Reports the current animation as completed until the sequencer finishes.
fn drive_to_completion(sequencer: &mut Sequencer, animator: &mut CharacterAnimator) -> usize {
    let mut events = 0;
    while !sequencer.is_complete() {
        let completed = animator.animation_name().unwrap_or_default().to_owned();
        sequencer.advance(animator, &completed);
        events += 1;
        assert!(events < 1000, "sequencer did not terminate");
    }
    events
}

fn step(animation: &str, phase: PreviewPhase, repetition: Option<u32>) -> PlaybackStep {
    PlaybackStep {
        animation: animation.to_owned(),
        phase,
        repetition,
    }
}

// ============================================================================
// Bookend Ordering
// ============================================================================

#[test]
fn two_animations_three_repeats() {
    let mut animator = performer();
    let mut sequencer = Sequencer::new(PreviewSettings::default(), ["A", "B"]).unwrap();

    sequencer.start(&mut animator);
    let events = drive_to_completion(&mut sequencer, &mut animator);

    assert_eq!(
        sequencer.history(),
        &[
            step("Rest", PreviewPhase::InitialRest, None),
            step("Stand", PreviewPhase::EnteringStand, None),
            step("A", PreviewPhase::BodyFirst, Some(1)),
            step("A", PreviewPhase::BodyRepeat, Some(2)),
            step("A", PreviewPhase::BodyRepeat, Some(3)),
            step("Stand", PreviewPhase::ExitingStand, None),
            step("B", PreviewPhase::BodyFirst, Some(1)),
            step("B", PreviewPhase::BodyRepeat, Some(2)),
            step("B", PreviewPhase::BodyRepeat, Some(3)),
            step("Stand", PreviewPhase::ExitingStand, None),
            step("Rest", PreviewPhase::FinalRest, None),
        ]
    );
    // Ten transitions plus the final rest completing.
    assert_eq!(events, 11);
    assert_eq!(sequencer.state(), &SequencerState::Complete);
}

#[test]
fn states_follow_phases() {
    let mut animator = performer();
    let mut sequencer = Sequencer::new(PreviewSettings::default(), ["A"]).unwrap();
    sequencer.start(&mut animator);
    assert_eq!(sequencer.state(), &SequencerState::Resting);

    let mut states = Vec::new();
    while !sequencer.is_complete() {
        let completed = animator.animation_name().unwrap().to_owned();
        sequencer.advance(&mut animator, &completed);
        states.push(sequencer.state().clone());
    }

    let repeating = |count| SequencerState::Repeating {
        animation: "A".to_owned(),
        count,
    };
    assert_eq!(
        states,
        vec![
            SequencerState::EnteringStand,
            repeating(1),
            repeating(2),
            repeating(3),
            SequencerState::ExitingStand,
            SequencerState::RestingFinal,
            SequencerState::Complete,
        ]
    );
}

#[test]
fn queue_is_consumed_front_to_back() {
    let mut animator = performer();
    let mut sequencer = Sequencer::new(PreviewSettings::default(), ["A", "B"]).unwrap();
    sequencer.start(&mut animator);
    assert_eq!(sequencer.pending().collect::<Vec<_>>(), ["A", "B"]);

    // Rest → Stand → A
    sequencer.advance(&mut animator, "Rest");
    sequencer.advance(&mut animator, "Stand");
    assert_eq!(animator.animation_name(), Some("A"));
    assert_eq!(sequencer.pending().collect::<Vec<_>>(), ["B"]);
    assert_eq!(sequencer.repeat_counter(), 1);
}

#[test]
fn bookend_names_are_removed_from_queue() {
    let sequencer =
        Sequencer::new(PreviewSettings::default(), ["Rest", "Walk", "Stand", "Run"]).unwrap();
    assert_eq!(sequencer.pending().collect::<Vec<_>>(), ["Walk", "Run"]);
}

#[test]
fn for_animator_seeds_queue_from_tracks() {
    let animator = performer();
    let sequencer = Sequencer::for_animator(PreviewSettings::default(), &animator).unwrap();
    assert_eq!(sequencer.pending().collect::<Vec<_>>(), ["A", "B"]);
}

// ============================================================================
// Repeat Counting
// ============================================================================

#[test]
fn single_repeat_goes_straight_to_stand() {
    let mut animator = performer();
    let settings = PreviewSettings {
        repeat_target: 1,
        ..Default::default()
    };
    let mut sequencer = Sequencer::new(settings, ["A", "B"]).unwrap();
    sequencer.start(&mut animator);
    drive_to_completion(&mut sequencer, &mut animator);

    let names: Vec<&str> = sequencer
        .history()
        .iter()
        .map(|s| s.animation.as_str())
        .collect();
    assert_eq!(names, ["Rest", "Stand", "A", "Stand", "B", "Stand", "Rest"]);
}

#[test]
fn repeat_replays_completed_name() {
    let mut animator = performer();
    let mut sequencer = Sequencer::new(PreviewSettings::default(), ["A"]).unwrap();
    sequencer.start(&mut animator);
    sequencer.advance(&mut animator, "Rest");
    sequencer.advance(&mut animator, "Stand");
    assert_eq!(animator.animation_name(), Some("A"));

    sequencer.advance(&mut animator, "A");
    assert_eq!(animator.animation_name(), Some("A"));
    assert_eq!(sequencer.repeat_counter(), 2);
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn empty_queue_without_tracks_terminates_on_first_completion() {
    let mut animator = CharacterAnimator::new(&Character::new("nobody"));
    let mut sequencer = Sequencer::new(PreviewSettings::default(), Vec::<String>::new()).unwrap();

    sequencer.start(&mut animator);
    assert_eq!(animator.animation_name(), Some("Rest"));

    sequencer.advance(&mut animator, "Rest");
    assert!(sequencer.is_complete());
    // No stand phase was ever entered.
    assert_eq!(sequencer.history().len(), 1);
}

#[test]
fn bookends_only_terminates_after_rest() {
    let mut animator = performer();
    let mut sequencer = Sequencer::new(PreviewSettings::default(), ["Rest", "Stand"]).unwrap();
    sequencer.start(&mut animator);

    assert_eq!(drive_to_completion(&mut sequencer, &mut animator), 1);
}

#[test]
fn completions_after_termination_are_ignored() {
    let mut animator = performer();
    let mut sequencer = Sequencer::new(PreviewSettings::default(), ["A"]).unwrap();
    sequencer.start(&mut animator);
    drive_to_completion(&mut sequencer, &mut animator);
    let steps = sequencer.history().len();

    sequencer.advance(&mut animator, "Rest");
    sequencer.advance(&mut animator, "A");

    assert!(sequencer.is_complete());
    assert_eq!(sequencer.history().len(), steps);
}

// ============================================================================
// Phase Configuration
// ============================================================================

#[test]
fn phase_speeds_reach_the_animator() {
    let mut animator = performer();
    let settings = PreviewSettings::default()
        .with_phase(PreviewPhase::EnteringStand, PhaseParams::new(0.75, 0.0))
        .with_phase(PreviewPhase::BodyFirst, PhaseParams::new(1.25, 0.0))
        .with_phase(PreviewPhase::BodyRepeat, PhaseParams::new(1.5, 0.0));
    let mut sequencer = Sequencer::new(settings, ["A"]).unwrap();

    sequencer.start(&mut animator);
    assert!((animator.speed_multiplier() - 2.0).abs() < f32::EPSILON);

    sequencer.advance(&mut animator, "Rest");
    assert!((animator.speed_multiplier() - 0.75).abs() < f32::EPSILON);

    sequencer.advance(&mut animator, "Stand");
    assert!((animator.speed_multiplier() - 1.25).abs() < f32::EPSILON);

    sequencer.advance(&mut animator, "A");
    assert!((animator.speed_multiplier() - 1.5).abs() < f32::EPSILON);
}

#[test]
fn fresh_animation_cross_fades_and_repeat_does_not() {
    let mut animator = performer();
    let mut sequencer = Sequencer::new(PreviewSettings::default(), ["A"]).unwrap();
    sequencer.start(&mut animator);
    sequencer.advance(&mut animator, "Rest");
    sequencer.advance(&mut animator, "Stand");

    let fade = animator.track("body").unwrap().channel().cross_fade().cloned();
    assert_eq!(fade.map(|f| f.from), Some("Stand".to_owned()));

    sequencer.advance(&mut animator, "A");
    assert!(animator.track("body").unwrap().channel().cross_fade().is_none());
}

#[test]
fn invalid_settings_are_rejected() {
    let settings = PreviewSettings {
        repeat_target: 0,
        ..Default::default()
    };
    let err = Sequencer::new(settings, ["A"]).unwrap_err();
    assert!(matches!(err, MarionetteError::InvalidSettings(_)));
}
