/// The machine opponent. It reads the same board a human sees and its
/// candidate goes back through the identical validation path; there are
/// no privileged shortcuts into the game state.
#[derive(Debug, Clone, Copy)]
pub struct Bot;

impl Bot {
    /// one legal move for the player to act, or None on a dead board;
    /// callers must treat None as a forced turn skip
    pub fn choose(game: &Game, tier: Tier, rng: &mut impl Rng) -> Option<(usize, usize)> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return None;
        }
        match tier {
            Tier::Easy => moves.choose(rng).copied(),
            Tier::Medium => Self::eager(game, &moves, rng),
            Tier::Hard => Self::wary(game, moves, rng),
        }
    }

    /// triangles this move would close right now
    fn gain(game: &Game, (a, b): (usize, usize)) -> usize {
        game.closing_triangles(a, b).len()
    }

    /// a random scoring move when one exists, otherwise a random move;
    /// no look-ahead beyond immediate scoring
    fn eager(game: &Game, moves: &[(usize, usize)], rng: &mut impl Rng) -> Option<(usize, usize)> {
        let scoring = moves
            .iter()
            .copied()
            .filter(|m| Self::gain(game, *m) > 0)
            .collect::<Vec<_>>();
        match scoring.is_empty() {
            true => moves.choose(rng).copied(),
            false => scoring.choose(rng).copied(),
        }
    }

    /// Maximize immediate triangles, first found winning ties in
    /// enumeration order. With nothing to score, look one ply ahead in
    /// random order for a move the opponent cannot score against; when
    /// every move gifts a triangle, concede one at random.
    fn wary(
        game: &Game,
        mut moves: Vec<(usize, usize)>,
        rng: &mut impl Rng,
    ) -> Option<(usize, usize)> {
        let (best, most) = moves.iter().fold((None, 0), |(best, most), &m| {
            let gain = Self::gain(game, m);
            match gain > most {
                true => (Some(m), gain),
                false => (best, most),
            }
        });
        if most > 0 {
            return best;
        }
        let fallback = moves.choose(rng).copied();
        moves.shuffle(rng);
        moves
            .into_iter()
            .find(|&(a, b)| {
                let child = game.project(a, b);
                child
                    .legal_moves()
                    .iter()
                    .all(|&(x, y)| child.closing_triangles(x, y).is_empty())
            })
            .or(fallback)
    }
}

use crate::gameplay::game::Game;
use crate::players::tier::Tier;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;
