/// Drives one session end to end. The engine exclusively owns the
/// authoritative Game plus the randomness behind dice and machine play,
/// takes requests from the embedding view, and reports every change to
/// the observers. All entry points are synchronous and run to
/// completion; requests arriving outside their phase are quiet no-ops.
pub struct Engine {
    game: Game,
    rng: SmallRng,
    opponent: Opponent,
    observers: Vec<Box<dyn Observer>>,
}

impl Engine {
    /// a fixed seed reproduces the whole session: board, dice, machine moves
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            game: Game::new(),
            rng: match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            },
            opponent: Opponent::Human,
            observers: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }
    pub fn observe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// is the engine waiting on the machine rather than the view
    pub fn machine_turn(&self) -> bool {
        matches!(self.game.phase(), Phase::Rolling | Phase::Playing)
            && self.game.current() == Player::Two
            && self.opponent.tier().is_some()
    }

    /// Leave the menu: scatter a fresh board sized by the one-shot
    /// layout the view hands us, then wait on the first roll.
    pub fn request_start(&mut self, stars: usize, width: f64, height: f64, opponent: Opponent) {
        if self.game.phase() != Phase::Menu {
            log::debug!("start ignored in {}", self.game.phase());
            return;
        }
        self.opponent = opponent;
        self.emit(Event::PhaseChanged(Phase::Configuring));
        let points = board::scatter(stars, width, height, PADDING, &mut self.rng);
        self.game.begin(points);
        self.emit(Event::ScoresChanged(self.game.scores()));
        self.emit(Event::PhaseChanged(self.game.phase()));
        if self.game.phase() == Phase::GameOver {
            self.emit(Event::GameOver(self.game.scores()));
        }
    }

    /// the human throws the die; machine rolls arrive through step()
    pub fn request_roll(&mut self) -> Option<u8> {
        if self.game.phase() != Phase::Rolling || self.machine_turn() {
            return None;
        }
        let value = self.game.roll(&mut self.rng);
        self.emit(Event::PhaseChanged(Phase::Playing));
        Some(value)
    }

    /// the human draws a segment; false means the move was rejected
    pub fn request_move(&mut self, a: usize, b: usize) -> bool {
        if self.game.phase() != Phase::Playing || self.machine_turn() {
            return false;
        }
        self.commit(a, b)
    }

    /// abandon the session from anywhere and return to the menu
    pub fn request_reset(&mut self) {
        if self.game.phase() == Phase::Menu {
            return;
        }
        self.game.reset();
        self.emit(Event::PhaseChanged(Phase::Menu));
    }

    /// One machine action: an automatic roll when the die is waiting, or
    /// one chosen move. The view paces calls to animate "thinking". A
    /// machine with no legal move skips its turn instead of looping.
    pub fn step(&mut self) -> bool {
        if !self.machine_turn() {
            return false;
        }
        let tier = self.opponent.tier().expect("machine turn");
        match self.game.phase() {
            Phase::Rolling => {
                let value = self.game.roll(&mut self.rng);
                log::debug!("machine rolled {value}");
                self.emit(Event::PhaseChanged(Phase::Playing));
                true
            }
            Phase::Playing => match Bot::choose(&self.game, tier, &mut self.rng) {
                Some((a, b)) => self.commit(a, b),
                None => {
                    self.game.skip();
                    self.emit(Event::PhaseChanged(self.game.phase()));
                    if self.game.phase() == Phase::GameOver {
                        self.emit(Event::GameOver(self.game.scores()));
                    }
                    true
                }
            },
            _ => false,
        }
    }

    /// push one validated move through the game and report what happened
    fn commit(&mut self, a: usize, b: usize) -> bool {
        let player = self.game.current();
        let before = self.game.phase();
        match self.game.attempt(a, b) {
            Outcome::Rejected(a, b) => {
                self.emit(Event::MoveRejected(a, b));
                false
            }
            Outcome::Accepted { segment, claimed } => {
                self.emit(Event::SegmentAdded(segment));
                if !claimed.is_empty() {
                    self.emit(Event::TrianglesClaimed(claimed, player));
                    self.emit(Event::ScoresChanged(self.game.scores()));
                }
                if self.game.phase() != before {
                    self.emit(Event::PhaseChanged(self.game.phase()));
                }
                if self.game.phase() == Phase::GameOver {
                    self.emit(Event::GameOver(self.game.scores()));
                }
                true
            }
        }
    }

    fn emit(&mut self, event: Event) {
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Engine({}, vs {})", self.game, self.opponent)
    }
}

use super::event::Event;
use super::event::Observer;
use super::game::Game;
use super::game::Outcome;
use super::phase::Phase;
use super::player::Player;
use crate::PADDING;
use crate::board;
use crate::players::Bot;
use crate::players::Opponent;
use rand::SeedableRng;
use rand::rngs::SmallRng;
