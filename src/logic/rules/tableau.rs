//! 場札 (Column / Row) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::{is_one_higher, is_one_lower, RankScale};
use crate::components::card::Card;

/// Bisley の列。空の列には何も置けない。
/// 置けるのは同じスートで、ランクが上でも下でもちょうど1つ違うカード。
pub fn can_push_to_column(top: Option<&Card>, card: &Card) -> bool {
    let Some(top) = top else {
        return false;
    };
    let same_suit = top.suit == card.suit;
    let adjacent = is_one_higher(RankScale::Full, card.rank, top.rank)
        || is_one_lower(RankScale::Full, card.rank, top.rank);
    debug!(
        "    [Rule Check] Moving {} onto {}. Same suit: {}. Adjacent: {}.",
        card, top, same_suit, adjacent
    );
    same_suit && adjacent
}

/// Besieged Fortress の行。空なら何でも OK、そうでなければスート問わず1つ下。
pub fn can_push_to_row(top: Option<&Card>, card: &Card) -> bool {
    match top {
        None => true,
        Some(top) => is_one_lower(RankScale::Short, card.rank, top.rank),
    }
}
