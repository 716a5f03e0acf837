//! Hand comparison.

use crate::hand::{Hand, HandCategory};

/// How two hands of the same category are ordered by their top cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopCardRule {
    /// Game rank, then suit.
    RankThenSuit,
    /// Suit, then game rank.
    SuitThenRank,
    /// Game rank only.
    RankOnly,
}

const fn top_card_rule(category: HandCategory) -> TopCardRule {
    match category {
        HandCategory::Single
        | HandCategory::Pair
        | HandCategory::Triple
        | HandCategory::Straight
        | HandCategory::StraightFlush => TopCardRule::RankThenSuit,
        HandCategory::Flush => TopCardRule::SuitThenRank,
        HandCategory::FullHouse | HandCategory::Quad => TopCardRule::RankOnly,
    }
}

/// Returns whether `challenger` legally supersedes `top`.
///
/// Both hands must be valid and hold the same number of cards. Hands of the
/// same category compare by their [top cards](Hand::top_card); five-card
/// hands of different categories compare by category alone, in the order
/// straight, flush, full house, quad, straight flush.
#[must_use]
pub fn beats(challenger: &Hand, top: &Hand) -> bool {
    if challenger.len() != top.len() || !challenger.is_valid() || !top.is_valid() {
        return false;
    }

    if challenger.category() != top.category() {
        return match (challenger.category().strength(), top.category().strength()) {
            (Some(challenger), Some(top)) => challenger > top,
            _ => false,
        };
    }

    let (Some(ours), Some(theirs)) = (challenger.top_card(), top.top_card()) else {
        return false;
    };

    match top_card_rule(challenger.category()) {
        TopCardRule::RankThenSuit => ours > theirs,
        TopCardRule::SuitThenRank => {
            (ours.suit, ours.game_rank()) > (theirs.suit, theirs.game_rank())
        }
        TopCardRule::RankOnly => ours.game_rank() > theirs.game_rank(),
    }
}
