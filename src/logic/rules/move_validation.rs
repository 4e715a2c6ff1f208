// src/logic/rules/move_validation.rs
//! スタックの種類ごとのルール表だよ。
//! どの種類が何を受け付けるか、上のカードを引き抜けるか、をここで振り分ける。

use crate::components::card::{Card, Suit};
use crate::components::stack::StackKind;
use crate::logic::rules::{foundation, tableau};

/// `kind` のスタック（一番上が `top`）に `card` を置けるか。
/// 副作用なしで、どんな入力でも panic しない。
pub fn can_accept(kind: StackKind, suit: Option<Suit>, top: Option<&Card>, card: &Card) -> bool {
    // 同じカードをもう一度積むことはない
    if top.is_some_and(|top| top.id == card.id) {
        return false;
    }
    match kind {
        StackKind::AceFoundation => foundation::can_push_to_ace_foundation(suit, top, card),
        StackKind::KingFoundation => foundation::can_push_to_king_foundation(suit, top, card),
        StackKind::Foundation => foundation::can_push_to_fortress_foundation(suit, top, card),
        StackKind::Column => tableau::can_push_to_column(top, card),
        StackKind::Row => tableau::can_push_to_row(top, card),
    }
}

/// 一番上のカードを引き抜いていい種類か。
/// Bisley の組札は一度積んだら二度と取り出せないよ。
pub fn allows_withdrawal(kind: StackKind) -> bool {
    match kind {
        StackKind::AceFoundation | StackKind::KingFoundation => false,
        StackKind::Foundation | StackKind::Column | StackKind::Row => true,
    }
}
