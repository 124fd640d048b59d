//! The matching game engine.
//!
//! A [`GameSession`] owns the one live round: the dealt cards, the pending
//! face-up selection, match progress and the elapsed-seconds counter. It never
//! sleeps or spawns. When two cards are face-up, [`GameSession::select_card`]
//! hands back a [`Resolution`] carrying the delay after which the caller must
//! pass it to [`GameSession::settle`]. Resolutions from an earlier round are
//! ignored, so a reset or restart can never be disturbed by late timers.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::best_times::{record_time, PersistenceStore};
use crate::types::{
    BestTimes, Card, GameStatus, Language, SessionState, VocabularyEntry, PAIRS_PER_ROUND,
};
use crate::vocabulary::VocabularyBank;

/// Delays between a selection and its visible outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTiming {
    pub match_settle: Duration,
    /// Longer so the full board stays visible before the win screen.
    pub final_match_settle: Duration,
    pub mismatch_reset: Duration,
    pub tick: Duration,
}

impl Default for GameTiming {
    fn default() -> Self {
        Self {
            match_settle: Duration::from_millis(500),
            final_match_settle: Duration::from_millis(1000),
            mismatch_reset: Duration::from_millis(1000),
            tick: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    Match,
    Mismatch,
}

/// A face-up pair waiting for its delayed outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub round: u64,
    pub first: String,
    pub second: String,
    pub kind: ResolutionKind,
    pub delay: Duration,
}

/// What settling a resolution changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The round moved on; nothing changed.
    Stale,
    Matched { matched_pairs: usize },
    Won { seconds: u32, new_best: bool },
    FlippedBack,
}

pub struct GameSession {
    bank: Arc<VocabularyBank>,
    timing: GameTiming,
    store: Box<dyn PersistenceStore>,
    best_times: BestTimes,
    rng: StdRng,
    round: u64,
    level: Option<String>,
    cards: Vec<Card>,
    flipped: Vec<String>,
    matched_pairs: usize,
    status: GameStatus,
    timer_seconds: u32,
    played_words: Vec<VocabularyEntry>,
}

impl GameSession {
    /// Create an idle session, loading best times from `store`.
    pub fn new(bank: Arc<VocabularyBank>, store: Box<dyn PersistenceStore>) -> Self {
        Self::with_rng(bank, store, StdRng::from_os_rng())
    }

    /// Create an idle session with a caller-provided random source.
    pub fn with_rng(
        bank: Arc<VocabularyBank>,
        store: Box<dyn PersistenceStore>,
        rng: StdRng,
    ) -> Self {
        let best_times = store.load();
        Self {
            bank,
            timing: GameTiming::default(),
            store,
            best_times,
            rng,
            round: 0,
            level: None,
            cards: Vec::new(),
            flipped: Vec::new(),
            matched_pairs: 0,
            status: GameStatus::Idle,
            timer_seconds: 0,
            played_words: Vec::new(),
        }
    }

    pub fn with_timing(mut self, timing: GameTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Deal a new round for `level`.
    ///
    /// Returns false, leaving the session idle and empty, when the level is
    /// unknown or has no entries.
    pub fn start_game(&mut self, level: &str) -> bool {
        self.round += 1;

        let bank = Arc::clone(&self.bank);
        let Some(pool) = bank.pool(level).filter(|pool| !pool.is_empty()) else {
            self.clear();
            return false;
        };

        let mut chosen = pool.to_vec();
        chosen.shuffle(&mut self.rng);
        chosen.truncate(PAIRS_PER_ROUND);

        let mut cards = Vec::with_capacity(chosen.len() * 2);
        for (pair_id, entry) in chosen.iter().enumerate() {
            cards.push(Card::new(pair_id, Language::En, entry.en.clone()));
            cards.push(Card::new(pair_id, Language::Th, entry.th.clone()));
        }
        cards.shuffle(&mut self.rng);

        self.level = Some(level.to_string());
        self.cards = cards;
        self.flipped.clear();
        self.matched_pairs = 0;
        self.timer_seconds = 0;
        self.played_words = chosen;
        self.status = GameStatus::Playing;
        true
    }

    /// Flip a card face-up.
    ///
    /// Ignored unless a round is in progress, the card is still face-down
    /// and unresolved, and fewer than two cards are pending. Returns the
    /// resolution to settle once this flip completes a pair.
    pub fn select_card(&mut self, card_id: &str) -> Option<Resolution> {
        if self.status != GameStatus::Playing || self.flipped.len() >= 2 {
            return None;
        }

        let card = self.cards.iter_mut().find(|card| card.id == card_id)?;
        if !card.is_selectable() {
            return None;
        }
        card.is_flipped = true;
        self.flipped.push(card.id.clone());

        if self.flipped.len() == 2 {
            self.begin_resolution()
        } else {
            None
        }
    }

    fn begin_resolution(&mut self) -> Option<Resolution> {
        let first = self.flipped[0].clone();
        let second = self.flipped[1].clone();
        let first_pair = self.card(&first)?.pair_id;
        let second_pair = self.card(&second)?.pair_id;

        let (kind, delay) = if first_pair == second_pair {
            let is_final = self.matched_pairs + 1 == self.total_pairs();
            self.update_pair(&first, &second, |card| {
                card.is_correct = true;
                card.is_flipped = true;
            });
            let delay = if is_final {
                self.timing.final_match_settle
            } else {
                self.timing.match_settle
            };
            (ResolutionKind::Match, delay)
        } else {
            self.update_pair(&first, &second, |card| card.is_shaking = true);
            (ResolutionKind::Mismatch, self.timing.mismatch_reset)
        };

        Some(Resolution {
            round: self.round,
            first,
            second,
            kind,
            delay,
        })
    }

    /// Apply the delayed outcome of a pair.
    pub fn settle(&mut self, resolution: &Resolution) -> SettleOutcome {
        if resolution.round != self.round
            || self.status != GameStatus::Playing
            || self.flipped != [resolution.first.as_str(), resolution.second.as_str()]
        {
            return SettleOutcome::Stale;
        }

        self.flipped.clear();
        match resolution.kind {
            ResolutionKind::Match => {
                self.update_pair(&resolution.first, &resolution.second, |card| {
                    card.is_matched = true;
                });
                self.matched_pairs += 1;
                if self.matched_pairs < self.total_pairs() {
                    return SettleOutcome::Matched {
                        matched_pairs: self.matched_pairs,
                    };
                }

                self.status = GameStatus::Won;
                let seconds = self.timer_seconds;
                let level = self.level.clone().unwrap_or_default();
                let new_best =
                    record_time(&mut self.best_times, self.store.as_ref(), &level, seconds);
                SettleOutcome::Won { seconds, new_best }
            }
            ResolutionKind::Mismatch => {
                self.update_pair(&resolution.first, &resolution.second, |card| {
                    card.is_flipped = false;
                    card.is_shaking = false;
                });
                SettleOutcome::FlippedBack
            }
        }
    }

    /// Advance the clock by one tick. Returns false once the round is over.
    pub fn tick(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.timer_seconds += 1;
        true
    }

    /// Abandon the current round.
    pub fn reset_game(&mut self) {
        self.round += 1;
        self.clear();
    }

    fn clear(&mut self) {
        self.level = None;
        self.cards.clear();
        self.flipped.clear();
        self.matched_pairs = 0;
        self.status = GameStatus::Idle;
        self.timer_seconds = 0;
        self.played_words.clear();
    }

    fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    fn update_pair(&mut self, first: &str, second: &str, update: impl Fn(&mut Card)) {
        for card in self
            .cards
            .iter_mut()
            .filter(|card| card.id == first || card.id == second)
        {
            update(card);
        }
    }

    fn total_pairs(&self) -> usize {
        self.played_words.len()
    }

    pub fn snapshot(&self) -> SessionState {
        SessionState {
            level: self.level.clone(),
            cards: self.cards.clone(),
            flipped_cards: self
                .flipped
                .iter()
                .filter_map(|id| self.card(id).cloned())
                .collect(),
            matched_pairs: self.matched_pairs,
            status: self.status,
            timer_seconds: self.timer_seconds,
            played_words: self.played_words.clone(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    pub fn played_words(&self) -> &[VocabularyEntry] {
        &self.played_words
    }

    pub fn best_times(&self) -> &BestTimes {
        &self.best_times
    }

    pub fn timing(&self) -> GameTiming {
        self.timing
    }

    pub fn bank(&self) -> &VocabularyBank {
        &self.bank
    }
}
