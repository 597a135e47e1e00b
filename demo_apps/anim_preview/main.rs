//! Animation Preview
//!
//! Plays every animation of a sample multi-mesh character through the
//! bookend sequence (Rest → Stand → animation ×N → Stand → … → Rest) and
//! exits once the closing rest pose has finished.
//!
//! ```text
//! anim_preview [settings.json] [--realtime]
//! ```
//!
//! Without `--realtime` the preview is simulated at a fixed 60 fps step and
//! finishes immediately; with it, frames are paced by the wall clock.

use std::time::Duration;

use anyhow::Context;
use marionette::animation::{AnimationLibrary, CharacterAnimator};
use marionette::preview::{PreviewRunner, PreviewSettings, Sequencer};
use marionette::scene::{Character, Node};
use marionette::utils::{FixedStep, TickSource, Timer};

const FRAME_TIME: Duration = Duration::from_millis(16);

/// A body with hair and a cape that follow most of its animations, and a
/// sword that only knows how to slash.
fn sample_character() -> Character {
    let mut character = Character::new("male");
    let root = character.add_node(Node::new("male"));

    let body = character.add_to_parent(
        Node::animated(
            "body",
            AnimationLibrary::from_clips([
                ("Rest", 1.0),
                ("Stand", 0.8),
                ("Walk", 1.2),
                ("Wave", 2.0),
                ("Jump", 0.9),
            ]),
        ),
        root,
    );
    character.add_to_parent(
        Node::animated(
            "hair",
            AnimationLibrary::from_clips([("Rest", 1.0), ("Stand", 0.8), ("Walk", 1.2), ("Jump", 1.1)]),
        ),
        body,
    );
    character.add_to_parent(
        Node::animated(
            "cape",
            AnimationLibrary::from_clips([("Rest", 1.0), ("Walk", 1.4), ("Wave", 2.0)]),
        ),
        body,
    );
    let hand = character.add_to_parent(Node::new("hand_r"), body);
    character.add_to_parent(
        Node::animated("sword", AnimationLibrary::from_clips([("Slash", 0.7)])),
        hand,
    );

    character
}

fn run<T: TickSource>(mut runner: PreviewRunner<T>, realtime: bool) -> anyhow::Result<()> {
    if realtime {
        while !runner.update()? {
            std::thread::sleep(FRAME_TIME);
        }
        log::info!(
            "Preview finished after {} frames ({:.2}s)",
            runner.frame_count(),
            runner.time()
        );
    } else {
        let report = runner.run()?;
        for step in &report.steps {
            log::debug!("{:?} {} {:?}", step.phase, step.animation, step.repetition);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut realtime = false;
    let mut settings_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            settings_path = Some(arg);
        }
    }

    let settings = match settings_path {
        Some(path) => PreviewSettings::from_path(&path)
            .with_context(|| format!("failed to load preview settings from {path}"))?,
        None => PreviewSettings::default(),
    };

    let character = sample_character();
    let animator = CharacterAnimator::new(&character);
    log::info!(
        "Character '{}' has {} animated sub-mesh(es)",
        character.name,
        animator.track_count()
    );

    let sequencer = Sequencer::for_animator(settings, &animator)?;

    if realtime {
        run(PreviewRunner::new(animator, sequencer, Timer::new()), true)
    } else {
        run(PreviewRunner::new(animator, sequencer, FixedStep::from_fps(60)), false)
    }
}
