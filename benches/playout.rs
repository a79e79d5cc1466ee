//! Benchmarks for complete games.
//!
//! Plays seeded games to the end with a random legal-action policy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use citadel_core::core::{Action, GameConfig, GameRng, PlayerId};
use citadel_core::game::Game;
use citadel_core::rules::RulesEngine;

const MAX_ACTIONS: usize = 5_000;

/// Random legal actions, always building when a build is legal.
fn play_out(players: usize, seed: u64) -> Game {
    let names: Vec<String> = (0..players).map(|i| format!("P{}", i)).collect();
    let mut game = Game::new(names, GameConfig::default().with_seed(seed)).unwrap();
    let mut policy = GameRng::new(seed ^ 0x5eed);
    game.start().unwrap();

    for _ in 0..MAX_ACTIONS {
        if game.is_over() {
            break;
        }
        let Some((player, actions)) = PlayerId::all(players)
            .map(|p| (p, game.legal_actions(p)))
            .find(|(_, a)| !a.is_empty())
        else {
            break;
        };
        let builds: Vec<&Action> = actions
            .iter()
            .filter(|a| matches!(a, Action::Build { .. }))
            .collect();
        let action = match policy.choose(&builds) {
            Some(build) => (*build).clone(),
            None => actions[policy.gen_range_usize(0..actions.len())].clone(),
        };
        let _ = game.apply(player, &action);
    }
    game
}

fn bench_game_4p(c: &mut Criterion) {
    c.bench_function("playout_4p", |b| {
        b.iter(|| black_box(play_out(4, black_box(42))));
    });
}

fn bench_game_7p(c: &mut Criterion) {
    c.bench_function("playout_7p", |b| {
        b.iter(|| black_box(play_out(7, black_box(42))));
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let mut game = Game::new(["A", "B", "C", "D"], GameConfig::default().with_seed(1)).unwrap();
    game.start().unwrap();

    c.bench_function("legal_actions_draft", |b| {
        b.iter(|| {
            for p in PlayerId::all(4) {
                black_box(game.legal_actions(black_box(p)));
            }
        });
    });
}

fn bench_clone(c: &mut Criterion) {
    let game = play_out(5, 7);
    c.bench_function("game_clone", |b| b.iter(|| black_box(game.clone())));
}

criterion_group!(
    benches,
    bench_game_4p,
    bench_game_7p,
    bench_legal_actions,
    bench_clone
);
criterion_main!(benches);
