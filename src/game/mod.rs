//! Game engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, STARTING_CARD};
use crate::deck::Deck;
use crate::options::{GameOptions, HAND_SIZE};
use crate::player::{MoveSource, Player};
use crate::result::GameResult;

mod driver;
mod snapshot;
pub mod state;
mod turn;

pub use driver::{DisplaySink, InputProvider};
pub use snapshot::{GameSnapshot, PlayerView};
pub use state::{GameState, PlayerAction, TurnOutcome, TurnState};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// A two-player climbing game between a human and the computer.
///
/// The game owns the deck, both players and the table play. Moves are fed in
/// one at a time with [`Game::submit`] for the human and
/// [`Game::play_ai_turn`] for the computer, or the whole loop can be driven
/// with [`Game::run`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Undealt cards.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Both seats, indexed by seat number.
    players: [Player; PLAYER_COUNT],
    /// The most recently accepted play.
    table_play: Vec<Card>,
    /// Seat that made the table play.
    table_owner: Option<usize>,
    /// Current turn and pass bookkeeping.
    turn: TurnState,
    /// Current game state.
    state: GameState,
    /// Turns taken since the deal.
    turns_taken: usize,
    /// Random number generator for shuffles and the starting-player fallback.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals it.
    ///
    /// The same options and seed always produce the same deal.
    ///
    /// # Example
    ///
    /// ```
    /// use climbrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 18);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self::empty(options, ChaCha8Rng::seed_from_u64(seed));
        game.deal_new_game();
        game
    }

    /// Creates a game from a prearranged deal.
    ///
    /// `hands` are indexed by seat and sorted on the way in; `first` is the
    /// seat that acts first. The seed only affects later restarts.
    #[must_use]
    pub fn from_deal(
        options: GameOptions,
        seed: u64,
        deck: Deck,
        hands: [Vec<Card>; PLAYER_COUNT],
        first: usize,
    ) -> Self {
        let mut game = Self::empty(options, ChaCha8Rng::seed_from_u64(seed));
        game.deck = deck;
        for (player, cards) in game.players.iter_mut().zip(hands) {
            player.take_hand(cards);
        }
        let first = first % PLAYER_COUNT;
        game.turn.current_player = first;
        game.state = GameState::AwaitingMove(first);
        game
    }

    fn empty(options: GameOptions, rng: ChaCha8Rng) -> Self {
        let human = Player::new(options.human_name.clone(), MoveSource::HumanInput);
        let ai = Player::new(options.ai_name.clone(), MoveSource::AiStrategy);
        let players = if options.human_seat.index() == 0 {
            [human, ai]
        } else {
            [ai, human]
        };

        Self {
            deck: Deck::new(),
            options,
            players,
            table_play: Vec::new(),
            table_owner: None,
            turn: TurnState::default(),
            state: GameState::AwaitingMove(0),
            turns_taken: 0,
            rng,
        }
    }

    /// Deals a fresh game: new shuffled deck, new hands, empty table.
    fn deal_new_game(&mut self) {
        self.deck.initialize();
        self.deck.shuffle(&mut self.rng);

        for player in &mut self.players {
            player.reset();
            let cards = self
                .deck
                .deal(HAND_SIZE)
                .expect("a full deck holds enough cards for every hand");
            player.take_hand(cards);
        }

        self.table_play.clear();
        self.table_owner = None;
        self.turns_taken = 0;

        let first = self.determine_starting_player();
        self.turn = TurnState {
            current_player: first,
            free_play_allowed: false,
            consecutive_passes: 0,
        };
        self.state = GameState::AwaitingMove(first);

        tracing::info!(
            starting_player = self.players[first].name(),
            cards_remaining = self.deck.remaining_count(),
            "game dealt"
        );
    }

    /// Returns the seat holding the starting card, or a random seat if the
    /// card is still in the deck.
    fn determine_starting_player(&mut self) -> usize {
        self.players
            .iter()
            .position(|player| player.hand().contains(STARTING_CARD))
            .unwrap_or_else(|| self.rng.random_range(0..PLAYER_COUNT))
    }

    /// Abandons the current game and deals a new one.
    ///
    /// The deck, both hands, both discard piles, the table and the pass
    /// counter are all reset, and the starting player is chosen again.
    pub fn restart(&mut self) {
        tracing::info!(turns_taken = self.turns_taken, "restarting game");
        self.deal_new_game();
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current turn bookkeeping.
    #[must_use]
    pub const fn turn_state(&self) -> TurnState {
        self.turn
    }

    /// Returns the seat whose turn it is, or `None` once the game is over.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        self.state.current_player()
    }

    /// Returns where the current player's move comes from.
    #[must_use]
    pub fn current_source(&self) -> Option<MoveSource> {
        self.current_player()
            .map(|seat| self.players[seat].source())
    }

    /// Returns the player at the given seat.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns both players, indexed by seat.
    #[must_use]
    pub const fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Returns the seat of the human player.
    #[must_use]
    pub const fn human_seat(&self) -> usize {
        self.options.human_seat.index()
    }

    /// Returns the seat of the computer player.
    #[must_use]
    pub const fn ai_seat(&self) -> usize {
        (self.human_seat() + 1) % PLAYER_COUNT
    }

    /// Returns the play currently on the table. Empty at the start of a
    /// round.
    #[must_use]
    pub fn table_play(&self) -> &[Card] {
        &self.table_play
    }

    /// Returns the seat that made the table play.
    #[must_use]
    pub const fn table_owner(&self) -> Option<usize> {
        self.table_owner
    }

    /// Returns whether the next play may be any cards at all.
    #[must_use]
    pub const fn free_play_allowed(&self) -> bool {
        self.turn.free_play_allowed
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining_count()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of turns taken since the deal.
    #[must_use]
    pub const fn turns_taken(&self) -> usize {
        self.turns_taken
    }

    /// Returns the result once a player has emptied their hand.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let winner = self.state.winner()?;
        let loser = (winner + 1) % PLAYER_COUNT;
        Some(GameResult {
            winner,
            winner_name: self.players[winner].name().into(),
            turns: self.turns_taken,
            loser_cards_left: self.players[loser].hand().len(),
        })
    }
}
