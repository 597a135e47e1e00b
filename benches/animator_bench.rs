//! Benchmarks for the per-frame animator update.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use marionette::animation::{AnimationLibrary, AnimationListener, CharacterAnimator, LoopMode};
use marionette::scene::{Character, Node};

struct Replay;

impl AnimationListener for Replay {
    fn on_anim_cycle_done(
        &mut self,
        animator: &mut CharacterAnimator,
        animation_name: &str,
    ) -> marionette::Result<()> {
        let name = animation_name.to_owned();
        animator.animate(&name, 1.0, 0.0, LoopMode::DontLoop);
        Ok(())
    }
}

fn crowd(meshes: usize) -> Character {
    let mut character = Character::new("crowd");
    let root = character.add_node(Node::new("root"));
    for i in 0..meshes {
        let library = if i % 4 == 0 {
            AnimationLibrary::from_clips([("Idle", 2.0)])
        } else {
            AnimationLibrary::from_clips([("Idle", 2.0), ("Walk", 1.0 + i as f32 * 0.01)])
        };
        character.add_to_parent(Node::animated(format!("mesh_{i}"), library), root);
    }
    character
}

fn bench_update(c: &mut Criterion) {
    for meshes in [4, 64] {
        let mut animator = CharacterAnimator::new(&crowd(meshes));
        let mut listener = Replay;
        animator.animate("Walk", 1.0, 0.0, LoopMode::DontLoop);

        c.bench_function(&format!("update_{meshes}_tracks"), |b| {
            b.iter(|| animator.update_with(black_box(1.0 / 60.0), &mut listener).unwrap());
        });
    }
}

fn bench_animate(c: &mut Criterion) {
    let mut animator = CharacterAnimator::new(&crowd(64));

    c.bench_function("animate_64_tracks_blended", |b| {
        b.iter(|| animator.animate(black_box("Walk"), 1.0, 0.5, LoopMode::DontLoop));
    });
}

criterion_group!(benches, bench_update, bench_animate);
criterion_main!(benches);
