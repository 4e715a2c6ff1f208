//! ゲームのクリア条件判定ロジックを定義するよ。

use crate::components::stack::{CardStack, StackKind};

/// `kind` のスタックが全部空っぽならクリア！🏆
/// Bisley なら Column、Besieged Fortress なら Row を渡す。
pub fn check_win_condition<'a>(stacks: impl IntoIterator<Item = &'a CardStack>, kind: StackKind) -> bool {
    stacks
        .into_iter()
        .filter(|stack| stack.kind() == kind)
        .all(CardStack::is_empty)
}
