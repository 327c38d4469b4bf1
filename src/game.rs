use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{Action, Move, Pile};
use crate::card::{Card, FOUNDATION_COUNT, RANKS_PER_SUIT, TABLEAU_COUNT};
use crate::deal::{Layout, deal, deal_cards};
use crate::deck::shuffled_deck;
use crate::error::{GameError, IllegalMove};
use crate::hint::find_legal_moves;
use crate::rules::{can_place_on_foundation, can_place_on_tableau};
use crate::score::ScoreRules;
use crate::state::{GameStateView, GameStatus, TableauView};

const DEFAULT_SEED: u64 = 0x5EED_5EED_5EED_5EED;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub seed: u64,
    pub scoring: ScoreRules,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            scoring: ScoreRules::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Builder that enables deterministic deck or layout injection for tests and front ends.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
    layout: Option<Layout>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            deck: None,
            layout: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoreRules) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Deal this deck instead of a shuffled one. Cards are dealt from the end.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Start from an arbitrary position. Takes precedence over [`with_deck`](Self::with_deck).
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        let GameBuilder {
            config,
            deck,
            layout,
        } = self;
        let piles = match (layout, deck) {
            (Some(layout), _) => {
                layout.validate()?;
                layout
            }
            (None, Some(deck)) => deal(deck)?,
            (None, None) => return Ok(Game::new(config)),
        };
        Ok(Game::from_layout(piles, config.scoring))
    }
}

/// Result of a draw request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    /// The stock's top card was turned onto the waste.
    Drew(Card),
    /// The stock was empty; this many waste cards went back to the stock.
    Recycled(usize),
    /// Nothing to draw or recycle, or the game is over.
    Nothing,
}

/// Result of a move attempt that referenced existing piles and cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { cards: usize, points: u32 },
    Rejected(IllegalMove),
}

impl MoveOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Klondike game state machine.
///
/// All transitions are all-or-nothing: a rejected move or a malformed request
/// leaves every pile and counter untouched.
#[derive(Clone, Debug)]
pub struct Game {
    piles: Layout,
    moves: u32,
    score: u32,
    status: GameStatus,
    scoring: ScoreRules,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Shuffles a fresh deck with the configured seed and deals it.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let piles = deal_cards(shuffled_deck(&mut rng));
        info!("dealt new game with seed {:#x}", config.seed);
        Self::from_layout(piles, config.scoring)
    }

    fn from_layout(piles: Layout, scoring: ScoreRules) -> Self {
        let mut game = Self {
            piles,
            moves: 0,
            score: 0,
            status: GameStatus::InProgress,
            scoring,
        };
        game.update_status();
        game
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Completed)
    }

    pub fn layout(&self) -> &Layout {
        &self.piles
    }

    pub fn stock(&self) -> &[Card] {
        &self.piles.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.piles.waste
    }

    pub fn tableau(&self, index: usize) -> Result<&[Card], GameError> {
        self.pile(Pile::Tableau(index))
    }

    pub fn foundation(&self, index: usize) -> Result<&[Card], GameError> {
        self.pile(Pile::Foundation(index))
    }

    pub fn pile(&self, pile: Pile) -> Result<&[Card], GameError> {
        match pile {
            Pile::Stock => Ok(&self.piles.stock),
            Pile::Waste => Ok(&self.piles.waste),
            Pile::Tableau(idx) => self
                .piles
                .tableau
                .get(idx)
                .map(Vec::as_slice)
                .ok_or(GameError::TableauIndex(idx)),
            Pile::Foundation(idx) => self
                .piles
                .foundations
                .get(idx)
                .map(Vec::as_slice)
                .ok_or(GameError::FoundationIndex(idx)),
        }
    }

    fn pile_mut(&mut self, pile: Pile) -> Result<&mut Vec<Card>, GameError> {
        match pile {
            Pile::Stock => Ok(&mut self.piles.stock),
            Pile::Waste => Ok(&mut self.piles.waste),
            Pile::Tableau(idx) => self
                .piles
                .tableau
                .get_mut(idx)
                .ok_or(GameError::TableauIndex(idx)),
            Pile::Foundation(idx) => self
                .piles
                .foundations
                .get_mut(idx)
                .ok_or(GameError::FoundationIndex(idx)),
        }
    }

    pub fn view(&self) -> GameStateView {
        let tableau = std::array::from_fn(|idx| {
            let pile = &self.piles.tableau[idx];
            let face_down = pile.iter().take_while(|c| !c.face_up).count();
            TableauView {
                face_down,
                face_up: pile[face_down..].to_vec(),
            }
        });
        GameStateView {
            status: self.status,
            moves: self.moves,
            score: self.score,
            stock_count: self.piles.stock.len(),
            waste: self.piles.waste.clone(),
            tableau,
            foundations: self.piles.foundations.clone(),
        }
    }

    /// Turns the top stock card onto the waste. With an empty stock the waste
    /// is turned back over: its cards return to the stock in reverse order,
    /// face down, so the first card drawn is drawn first again.
    pub fn draw(&mut self) -> Draw {
        if self.is_won() {
            return Draw::Nothing;
        }
        if let Some(mut card) = self.piles.stock.pop() {
            card.face_up = true;
            self.piles.waste.push(card);
            self.moves += 1;
            debug!("drew {card}");
            return Draw::Drew(card);
        }
        if self.piles.waste.is_empty() {
            return Draw::Nothing;
        }
        let mut recycled = std::mem::take(&mut self.piles.waste);
        recycled.reverse();
        for card in &mut recycled {
            card.face_up = false;
        }
        let count = recycled.len();
        self.piles.stock = recycled;
        debug!("recycled {count} waste cards into the stock");
        Draw::Recycled(count)
    }

    /// Validates and applies a move.
    ///
    /// Rule violations come back as [`MoveOutcome::Rejected`]. Only requests that
    /// name a missing pile, or a card absent from the source pile, are errors.
    pub fn attempt_move(&mut self, mv: &Move) -> Result<MoveOutcome, GameError> {
        let outcome = match self.check_move(mv)? {
            Ok(index) => self.apply_move(mv, index)?,
            Err(reason) => MoveOutcome::Rejected(reason),
        };
        if let MoveOutcome::Rejected(reason) = outcome {
            trace!("rejected {} from {} to {}: {reason}", mv.card, mv.from, mv.to);
        }
        Ok(outcome)
    }

    /// Returns the source index of the moving card when the move is legal.
    fn check_move(&self, mv: &Move) -> Result<Result<usize, IllegalMove>, GameError> {
        let source = self.pile(mv.from)?;
        let destination = self.pile(mv.to)?;

        if self.is_won() {
            return Ok(Err(IllegalMove::GameOver));
        }
        let route_ok = match (mv.from, mv.to) {
            (Pile::Waste, Pile::Tableau(_) | Pile::Foundation(_)) => true,
            (Pile::Tableau(_), Pile::Foundation(_)) => true,
            (Pile::Tableau(a), Pile::Tableau(b)) => a != b,
            (Pile::Foundation(_), Pile::Tableau(_)) => true,
            _ => false,
        };
        if !route_ok {
            return Ok(Err(IllegalMove::UnsupportedRoute));
        }
        if source.is_empty() {
            return Ok(Err(IllegalMove::EmptySource));
        }

        let index = source
            .iter()
            .position(|c| c.id == mv.card.id)
            .ok_or(GameError::CardNotInPile(mv.card.id))?;
        let card = &source[index];
        let is_top = index + 1 == source.len();

        if !card.face_up {
            return Ok(Err(IllegalMove::NotPlayable));
        }
        if !is_top {
            // Only a tableau run may carry the cards stacked above it.
            if !mv.from.is_tableau() {
                return Ok(Err(IllegalMove::NotPlayable));
            }
            if mv.to.is_foundation() {
                return Ok(Err(IllegalMove::MultipleCardsToFoundation));
            }
        }

        let fits = match mv.to {
            Pile::Foundation(_) => can_place_on_foundation(card, destination.last()),
            _ => can_place_on_tableau(card, destination.last()),
        };
        if !fits {
            return Ok(Err(IllegalMove::RuleViolation));
        }
        Ok(Ok(index))
    }

    fn apply_move(&mut self, mv: &Move, index: usize) -> Result<MoveOutcome, GameError> {
        let source = self.pile_mut(mv.from)?;
        let moving = source.split_off(index);
        if mv.from.is_tableau() {
            if let Some(exposed) = source.last_mut() {
                exposed.face_up = true;
            }
        }
        let cards = moving.len();
        self.pile_mut(mv.to)?.extend(moving);

        let points = self.scoring.points_for(mv.to);
        self.moves += 1;
        self.score += points;
        debug!(
            "moved {} ({cards} card(s)) from {} to {} for {points} points",
            mv.card, mv.from, mv.to
        );
        self.update_status();
        Ok(MoveOutcome::Applied { cards, points })
    }

    /// Plays a card to the first pile that takes it: foundations in index
    /// order, then, for a waste card, tableaus in index order. Tableau cards
    /// only ever go up to a foundation this way.
    pub fn auto_move(&mut self, from: Pile, card: Card) -> Result<Option<Move>, GameError> {
        let foundations = (0..FOUNDATION_COUNT).map(Pile::Foundation);
        let candidates: Vec<Pile> = match from {
            Pile::Waste => foundations
                .chain((0..TABLEAU_COUNT).map(Pile::Tableau))
                .collect(),
            Pile::Tableau(_) => foundations.collect(),
            Pile::Stock | Pile::Foundation(_) => Vec::new(),
        };
        for to in candidates {
            let mv = Move::new(from, to, card);
            if self.attempt_move(&mv)?.applied() {
                return Ok(Some(mv));
            }
        }
        Ok(None)
    }

    /// Every legal move in hint order, then a draw if the stock or waste holds cards.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_won() {
            return Vec::new();
        }
        let mut actions: Vec<Action> = find_legal_moves(self)
            .into_iter()
            .map(Action::Move)
            .collect();
        if !self.piles.stock.is_empty() || !self.piles.waste.is_empty() {
            actions.push(Action::Draw);
        }
        actions
    }

    /// Applies an action and reports whether the state changed.
    pub fn apply_action(&mut self, action: Action) -> Result<bool, GameError> {
        match action {
            Action::Draw => Ok(!matches!(self.draw(), Draw::Nothing)),
            Action::Move(mv) => Ok(self.attempt_move(&mv)?.applied()),
        }
    }

    fn update_status(&mut self) {
        let complete = self
            .piles
            .foundations
            .iter()
            .all(|pile| pile.len() == RANKS_PER_SUIT);
        if complete && !self.is_won() {
            info!(
                "game completed after {} moves with score {}",
                self.moves, self.score
            );
            self.status = GameStatus::Completed;
        }
    }
}
