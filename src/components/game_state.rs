// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲームの状態。Playing から Finished への一方通行だよ！🏁
///
/// undo で盤面が戻っても Finished は Finished のまま（クリアのお知らせは1回だけ）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Finished,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        self == GameStatus::Finished
    }
}
