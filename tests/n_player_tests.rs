//! N-player playouts.
//!
//! Plays complete games for every supported player count with a simple
//! builder policy and checks the end state.

use citadel_core::cards::{BASE_DECK_SIZE, HAUNTED_CITY};
use citadel_core::core::{Action, GameConfig, GameError, GraveyardChoice, PlayerId};
use citadel_core::game::Game;
use citadel_core::rules::{GameResult, RulesEngine};

const MAX_ACTIONS: usize = 20_000;

/// Prefer building; take gold when a buildable card is in hand, draw otherwise.
fn choose(game: &Game, player: PlayerId, actions: &[Action]) -> Action {
    let me = game.player(player).unwrap();
    let wants_gold = me
        .hand
        .iter()
        .any(|d| d.is(HAUNTED_CITY) || !me.city_has(&d.name));

    let priority = |a: &Action| match a {
        Action::KeepCard { .. } => 0,
        Action::GraveyardRespond {
            choice: GraveyardChoice::Accept,
        } => 0,
        Action::DraftPick { .. } => 0,
        Action::Build { .. } => 1,
        Action::TakeGold if wants_gold => 2,
        Action::DrawCards if !wants_gold => 2,
        Action::EndTurn => 4,
        _ => 3,
    };
    let best = actions.iter().map(priority).min().unwrap();
    // Abilities and district powers are only used when nothing better exists.
    actions
        .iter()
        .find(|a| priority(a) == best && (best != 3 || !matches!(a, Action::Ability { .. })))
        .or_else(|| actions.iter().find(|a| matches!(a, Action::EndTurn)))
        .or_else(|| actions.first())
        .cloned()
        .unwrap()
}

fn play_out(players: usize, seed: u64) -> Game {
    let names: Vec<String> = (0..players).map(|i| format!("P{}", i)).collect();
    let mut game = Game::new(names, GameConfig::default().with_seed(seed)).unwrap();
    game.start().unwrap();

    for _ in 0..MAX_ACTIONS {
        if game.is_over() {
            break;
        }
        let (player, actions) = PlayerId::all(players)
            .map(|p| (p, game.legal_actions(p)))
            .find(|(_, a)| !a.is_empty())
            .expect("someone can act while the game runs");
        let action = choose(&game, player, &actions);
        game.apply(player, &action).unwrap();
        assert_eq!(game.cards_in_play(), BASE_DECK_SIZE);
    }
    game
}

/// Games finish for every player count.
#[test]
fn test_playouts_finish_for_all_player_counts() {
    for players in 2..=7 {
        let game = play_out(players, 1000 + players as u64);

        assert!(game.is_over(), "{} player game did not finish", players);
        assert_eq!(game.scores().len(), players);
        let first = game.first_to_complete().unwrap();
        assert!(game.player(first).unwrap().city.len() >= 7);
        assert_eq!(game.scores()[first.index()].first_complete, 4);

        let result = game.is_terminal().unwrap();
        let best = game.scores().iter().map(|s| s.total).max().unwrap();
        for score in game.scores() {
            assert_eq!(result.is_winner(score.player), score.total == best);
        }
    }
}

/// Two- and three-player games hand out two roles per player each round.
#[test]
fn test_low_player_counts_take_two_turns() {
    for players in [2, 3] {
        let names: Vec<String> = (0..players).map(|i| format!("P{}", i)).collect();
        let mut game = Game::new(names, GameConfig::default().with_seed(8)).unwrap();
        game.start().unwrap();
        while let Some(picker) = game.draft().and_then(|d| d.current_picker()) {
            let role = game.draft().unwrap().available()[0];
            game.apply(picker, &Action::DraftPick { role }).unwrap();
        }

        for player in game.players().values() {
            assert_eq!(player.characters.len(), 2);
        }

        let mut turns = 0;
        while game.round() == 1 {
            let turn = game.current_turn().unwrap();
            game.apply(turn.player, &Action::EndTurn).unwrap();
            turns += 1;
        }
        assert_eq!(turns, players * 2);
    }
}

/// Only the listed counts are accepted.
#[test]
fn test_player_count_limits() {
    for players in [0usize, 1, 8, 12] {
        let names: Vec<String> = (0..players).map(|i| i.to_string()).collect();
        assert_eq!(
            Game::new(names, GameConfig::default()).unwrap_err(),
            GameError::InvalidPlayerCount(players)
        );
    }
}

/// A lower completion threshold ends the game sooner.
#[test]
fn test_custom_end_city_size() {
    let names = ["A", "B", "C", "D"];
    let config = GameConfig::default().with_seed(4).with_end_city_size(3);
    let mut game = Game::new(names, config).unwrap();
    game.start().unwrap();

    for _ in 0..MAX_ACTIONS {
        if game.is_over() {
            break;
        }
        let (player, actions) = PlayerId::all(4)
            .map(|p| (p, game.legal_actions(p)))
            .find(|(_, a)| !a.is_empty())
            .unwrap();
        let action = choose(&game, player, &actions);
        game.apply(player, &action).unwrap();
    }

    assert!(game.is_over());
    let first = game.first_to_complete().unwrap();
    assert!(game.player(first).unwrap().city.len() >= 3);
    assert!(matches!(
        game.is_terminal(),
        Some(GameResult::Winner(_)) | Some(GameResult::Winners(_))
    ));
}
