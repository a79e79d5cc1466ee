//! The game aggregate root.
//!
//! `Game` owns the table, the phase machine, the draft and the roll-call.
//! Every player input goes through [`Game::apply`]; accepted actions
//! return the events they produced, rejected ones return a `GameError`
//! and leave the game untouched.
//!
//! ## Example
//!
//! ```
//! use citadel_core::core::{Action, GameConfig, GamePhase};
//! use citadel_core::game::Game;
//!
//! let config = GameConfig::default().with_seed(42);
//! let mut game = Game::new(["Ada", "Bo", "Cy", "Di"], config).unwrap();
//! game.start().unwrap();
//! assert_eq!(game.phase(), GamePhase::DraftPick);
//!
//! let picker = game.draft().unwrap().current_picker().unwrap();
//! let role = game.draft().unwrap().available()[0];
//! let events = game.apply(picker, &Action::DraftPick { role }).unwrap();
//! assert!(!events.is_empty());
//! ```

mod legal;
mod resolve;
mod turn;
mod view;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::abilities::AbilityRegistry;
use crate::cards::{CharacterRole, District};
use crate::core::{
    Action, ActionRecord, GameConfig, GameError, GamePhase, GameRng, GameRngState,
    GraveyardPending, Player, PlayerId, PlayerMap, Result, Table,
};
use crate::draft::DraftState;
use crate::events::GameEvent;
use crate::rules::{calculate_scores, ScoreEntry};
use crate::zones::Deck;

pub use view::{DraftProgress, GraveyardOffer, PlayerView, PublicPlayerView, PublicView};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;

/// The player and role whose turn is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTurn {
    pub player: PlayerId,
    pub role: CharacterRole,
}

/// Drawn cards waiting for the active player to pick one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDraw {
    pub cards: Vec<District>,
    pub keep: usize,
}

/// One game, from lobby to final scores.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    abilities: AbilityRegistry,
    rng: GameRng,
    table: Table,
    phase: GamePhase,
    round: u32,
    call_pointer: Option<CharacterRole>,
    turn: Option<ActiveTurn>,
    draft: Option<DraftState>,
    draw_choice: Option<PendingDraw>,
    final_round: bool,
    first_to_complete: Option<PlayerId>,
    scores: Vec<ScoreEntry>,
    history: Vector<ActionRecord>,
}

impl Game {
    /// Seat players with the standard abilities.
    ///
    /// Fails with `InvalidPlayerCount` outside 2-7 players, or
    /// `InvalidConfig` for an unusable configuration.
    pub fn new<I, S>(names: I, config: GameConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_abilities(names, config, AbilityRegistry::standard())
    }

    /// Seat players with a custom ability registry.
    ///
    /// The registry must cover all eight roles; a gap is reported as
    /// `MissingAbility` here rather than mid-round.
    pub fn with_abilities<I, S>(names: I, config: GameConfig, abilities: AbilityRegistry) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }
        config.validate()?;
        abilities.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::shuffled(config.catalog.instances(), &mut rng);
        let players = PlayerMap::from_vec(
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| Player::new(PlayerId::new(i as u8), name))
                .collect(),
        );
        let table = Table::new(players, deck, config.end_city_size);
        debug!(players = table.player_count(), seed = rng.seed(), "game created");

        Ok(Self {
            config,
            abilities,
            rng,
            table,
            phase: GamePhase::Lobby,
            round: 0,
            call_pointer: None,
            turn: None,
            draft: None,
            draw_choice: None,
            final_round: false,
            first_to_complete: None,
            scores: Vec::new(),
            history: Vector::new(),
        })
    }

    /// Deal starting hands and gold, crown the first seat and open the
    /// first draft.
    pub fn start(&mut self) -> Result<Vec<GameEvent>> {
        if self.phase != GamePhase::Lobby {
            return Err(GameError::WrongPhase(self.phase));
        }

        let Table { players, deck, .. } = &mut self.table;
        for (_, player) in players.iter_mut() {
            player.hand = deck.draw(self.config.starting_hand_size);
            player.gold = self.config.starting_gold;
        }
        self.table.pass_crown(PlayerId::new(0));
        info!(players = self.table.player_count(), seed = self.seed(), "game started");

        Ok(self.start_draft())
    }

    /// Submit a player action.
    ///
    /// On success returns the events produced, in order. On failure the
    /// game is unchanged.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>> {
        let result = self.dispatch(player, action);
        match &result {
            Ok(events) => {
                debug!(%player, action = action.name(), events = events.len(), "action accepted");
                let sequence = self.history.len() as u32;
                self.history
                    .push_back(ActionRecord::new(player, action.clone(), self.round, sequence));
            }
            Err(err) => debug!(%player, action = action.name(), %err, "action rejected"),
        }
        result
    }

    fn dispatch(&mut self, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>> {
        self.table.player(player)?;
        match action {
            Action::DraftPick { role } => self.draft_pick(player, *role),
            Action::TakeGold => self.take_gold(player),
            Action::DrawCards => self.draw_cards(player),
            Action::KeepCard { index } => self.keep_card(player, *index),
            Action::Build { district } => self.build(player, district),
            Action::Ability { input } => self.use_ability(player, input),
            Action::EndTurn => self.end_turn(player),
            Action::LabDiscard { district } => self.lab_discard(player, district),
            Action::SmithyDraw => self.smithy_draw(player),
            Action::GraveyardRespond { choice } => self.graveyard_respond(player, *choice),
        }
    }

    fn start_draft(&mut self) -> Vec<GameEvent> {
        self.round += 1;
        self.phase = GamePhase::DraftSetup;
        self.table.clear_markers();
        self.call_pointer = None;
        self.turn = None;
        for (_, player) in self.table.players.iter_mut() {
            player.reset_round();
        }

        let crown = self.table.crown_holder().unwrap_or(PlayerId::new(0));
        let draft = DraftState::setup(self.table.player_count(), crown, &mut self.rng);
        let events = vec![
            GameEvent::DraftStart {
                round: self.round,
                face_up: draft.face_up().to_vec(),
                available_count: draft.available().len(),
            },
            GameEvent::phase(GamePhase::DraftPick),
        ];
        self.draft = Some(draft);
        self.phase = GamePhase::DraftPick;
        info!(round = self.round, %crown, "draft started");
        events
    }

    fn draft_pick(&mut self, player: PlayerId, role: CharacterRole) -> Result<Vec<GameEvent>> {
        if self.phase != GamePhase::DraftPick {
            return Err(GameError::WrongPhase(self.phase));
        }
        let draft = self.draft.as_mut().ok_or(GameError::WrongPhase(self.phase))?;
        draft.pick(player, role)?;

        let mut events = vec![GameEvent::DraftPick { player, role }];
        if draft.is_done() {
            let picks = draft.take_picks();
            for (id, roles) in picks.iter() {
                self.table.players[id].characters = roles.clone();
            }
            events.push(GameEvent::DraftDone);
            events.extend(self.resume_roll_call()?);
        }
        Ok(events)
    }

    fn end_round(&mut self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::RoundEnd { round: self.round }];
        self.turn = None;

        if !self.final_round {
            let completed = self
                .table
                .players()
                .iter()
                .find(|(_, p)| self.table.is_complete(p))
                .map(|(id, _)| id);
            if let Some(id) = completed {
                self.final_round = true;
                self.first_to_complete.get_or_insert(id);
            }
        }

        if self.final_round {
            events.extend(self.end_game());
        } else {
            events.extend(self.start_draft());
        }
        events
    }

    fn end_game(&mut self) -> Vec<GameEvent> {
        self.phase = GamePhase::GameOver;
        self.scores = calculate_scores(
            self.table.players(),
            self.first_to_complete,
            self.config.end_city_size,
        );
        info!(round = self.round, "game over");
        vec![
            GameEvent::GameOver {
                scores: self.scores.clone(),
            },
            GameEvent::phase(GamePhase::GameOver),
        ]
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn abilities(&self) -> &AbilityRegistry {
        &self.abilities
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current round, starting at 1 with the first draft.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The seed this game's shuffles came from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Checkpoint of the shuffle stream, for save files and lookahead.
    ///
    /// `GameRng::from_state` resumes the stream where this game is now.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        self.table.players()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.table.player(id)
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.table.deck().len()
    }

    /// This round's draft, kept after picking ends.
    #[must_use]
    pub fn draft(&self) -> Option<&DraftState> {
        self.draft.as_ref()
    }

    #[must_use]
    pub fn current_turn(&self) -> Option<ActiveTurn> {
        self.turn
    }

    /// Last role called this round.
    #[must_use]
    pub fn call_pointer(&self) -> Option<CharacterRole> {
        self.call_pointer
    }

    #[must_use]
    pub fn murdered_role(&self) -> Option<CharacterRole> {
        self.table.murdered()
    }

    #[must_use]
    pub fn robbed_role(&self) -> Option<CharacterRole> {
        self.table.robbed()
    }

    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.final_round
    }

    #[must_use]
    pub fn first_to_complete(&self) -> Option<PlayerId> {
        self.first_to_complete
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Final scores; empty until the game is over.
    #[must_use]
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    #[must_use]
    pub fn pending_graveyard(&self) -> Option<&GraveyardPending> {
        self.table.pending_graveyard()
    }

    #[must_use]
    pub fn pending_draw(&self) -> Option<&PendingDraw> {
        self.draw_choice.as_ref()
    }

    /// Every accepted action, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards in the deck, hands, cities and in flight.
    ///
    /// Always equal to the catalog size.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.table.card_count() + self.draw_choice.as_ref().map_or(0, |d| d.cards.len())
    }
}
