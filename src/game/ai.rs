//! Card selection for the automated player.
//!
//! The heuristic is deterministic: the same hand and table top always
//! produce the same choice. It is exposed as pure functions over card
//! slices so it can be exercised without driving a whole game.

use alloc::vec::Vec;

use crate::card::Card;

/// Chooses which card the automated player should play.
///
/// Returns the index into `hand` of the chosen card, or `None` for an empty
/// hand. Decision order, first matching rule wins:
///
/// 1. a single card in hand is forced;
/// 2. a single candidate (hand card matching the table top by rank or suit)
///    is played;
/// 3. with an empty table or no candidates, a card is picked to keep
///    capture chances on the rest of the hand (see [`choose_without_candidates`]);
/// 4. with two or more candidates, the tie-break below picks one.
#[must_use]
pub fn choose_card(hand: &[Card], table_top: Option<Card>) -> Option<usize> {
    match hand {
        [] => None,
        [_] => Some(0),
        _ => {
            let candidates = table_top.map_or_else(Vec::new, |top| candidates(hand, &top));
            let card = match candidates.as_slice() {
                [] => hand[choose_without_candidates(hand)],
                [lone] => *lone,
                two_or_more => {
                    // Safe: table_top exists whenever candidates do.
                    let top = table_top?;
                    choose_among_candidates(two_or_more, &top)
                }
            };
            hand.iter().position(|c| *c == card)
        }
    }
}

/// Returns the hand cards matching the table top: rank matches first, in
/// hand order, then suit matches.
///
/// A card can never match on both axes (it would equal the top itself), so
/// the two passes are disjoint; the suit pass still excludes rank matches
/// to keep the dedup explicit.
#[must_use]
pub fn candidates(hand: &[Card], top: &Card) -> Vec<Card> {
    let mut cards: Vec<Card> = hand.iter().filter(|c| c.rank == top.rank).copied().collect();
    cards.extend(
        hand.iter()
            .filter(|c| c.suit == top.suit && c.rank != top.rank),
    );
    cards
}

/// Picks a card when no capture is possible (empty table or no candidates).
///
/// Prefers the first card of a suit held at least twice, then the first
/// card of a rank held at least twice, then the first card. Dumping a
/// duplicate-ish card keeps capture chances on the less redundant cards.
///
/// Returns an index into `hand`; `hand` must be non-empty.
#[must_use]
pub fn choose_without_candidates(hand: &[Card]) -> usize {
    first_with_duplicate(hand, |a, b| a.suit == b.suit)
        .or_else(|| first_with_duplicate(hand, |a, b| a.rank == b.rank))
        .unwrap_or(0)
}

fn first_with_duplicate(hand: &[Card], same: impl Fn(&Card, &Card) -> bool) -> Option<usize> {
    hand.iter()
        .position(|card| hand.iter().filter(|other| same(card, other)).count() >= 2)
}

/// Picks among two or more candidates.
///
/// If at least two candidates share the table top's suit, the first such
/// candidate wins; else if at least two share its rank, the first of those;
/// else the first candidate. Candidate order is rank matches before suit
/// matches, so the fallback favors a rank capture.
fn choose_among_candidates(candidates: &[Card], top: &Card) -> Card {
    let suit_matches = candidates.iter().filter(|c| c.suit == top.suit).count();
    if suit_matches >= 2 {
        if let Some(card) = candidates.iter().find(|c| c.suit == top.suit) {
            return *card;
        }
    }

    let rank_matches = candidates.iter().filter(|c| c.rank == top.rank).count();
    if rank_matches >= 2 {
        if let Some(card) = candidates.iter().find(|c| c.rank == top.rank) {
            return *card;
        }
    }

    candidates[0]
}
