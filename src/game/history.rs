// src/game/history.rs

use std::cell::RefCell;

use log::{debug, info};

use crate::error::{GameError, GameResult};
use crate::event::EventHandler;

/// 出した命令の履歴と、今どこまで適用済みかのカーソル。
///
/// `commands[..applied]` が適用済み、その先は redo できる分。
/// 途中から新しい命令を積むと、redo できる分は捨てられるよ。
/// 中身が変わるたびに `on_history_changed` が鳴る。
///
/// History 自身はどっち向きに盤面を動かすかは知らない。
/// `undo` / `redo` は命令を返すだけで、適用するのは呼び出し側。
#[derive(Debug)]
pub struct History<C> {
    state: RefCell<HistoryState<C>>,
    on_history_changed: EventHandler<()>,
}

#[derive(Debug)]
struct HistoryState<C> {
    commands: Vec<C>,
    applied: usize,
}

impl<C: Clone> History<C> {
    pub fn new() -> Self {
        Self::with_event(EventHandler::new())
    }

    pub fn with_event(on_history_changed: EventHandler<()>) -> Self {
        Self {
            state: RefCell::new(HistoryState { commands: Vec::new(), applied: 0 }),
            on_history_changed,
        }
    }

    pub fn on_history_changed(&self) -> &EventHandler<()> {
        &self.on_history_changed
    }

    pub fn push(&self, command: C) -> GameResult<()> {
        self.ensure_idle()?;
        {
            let mut state = self.state.borrow_mut();
            let applied = state.applied;
            if applied < state.commands.len() {
                debug!("History: dropping {} redo command(s)", state.commands.len() - applied);
                state.commands.truncate(applied);
            }
            state.commands.push(command);
            state.applied += 1;
        }
        self.on_history_changed.trigger(&());
        Ok(())
    }

    /// 1つ戻る。戻すべき命令を返すよ。
    pub fn undo(&self) -> GameResult<C> {
        self.ensure_idle()?;
        let command = {
            let mut state = self.state.borrow_mut();
            if state.applied == 0 {
                return Err(GameError::NoHistory);
            }
            state.applied -= 1;
            state.commands[state.applied].clone()
        };
        self.on_history_changed.trigger(&());
        Ok(command)
    }

    /// 1つ進む。やり直す命令を返すよ。
    pub fn redo(&self) -> GameResult<C> {
        self.ensure_idle()?;
        let command = {
            let mut state = self.state.borrow_mut();
            if state.applied >= state.commands.len() {
                return Err(GameError::NoHistory);
            }
            state.applied += 1;
            state.commands[state.applied - 1].clone()
        };
        self.on_history_changed.trigger(&());
        Ok(command)
    }

    /// 全部忘れる。空でも必ずイベントは鳴らす（表示側がボタン状態をリセットするため）。
    pub fn clear(&self) -> GameResult<()> {
        self.ensure_idle()?;
        {
            let mut state = self.state.borrow_mut();
            state.commands.clear();
            state.applied = 0;
        }
        info!("History: cleared");
        self.on_history_changed.trigger(&());
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.state.borrow().applied > 0
    }

    pub fn can_redo(&self) -> bool {
        let state = self.state.borrow();
        state.applied < state.commands.len()
    }

    /// 最後に適用した命令の位置。何も適用してなければ -1。
    pub fn cursor(&self) -> isize {
        self.state.borrow().applied as isize - 1
    }

    pub fn len(&self) -> usize {
        self.state.borrow().commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 覚えている命令の写し（redo できる分も含む）。
    pub fn commands(&self) -> Vec<C> {
        self.state.borrow().commands.clone()
    }

    fn ensure_idle(&self) -> GameResult<()> {
        if self.on_history_changed.is_dispatching() {
            return Err(GameError::Reentrant);
        }
        Ok(())
    }
}

impl<C: Clone> Default for History<C> {
    fn default() -> Self {
        Self::new()
    }
}
