// src/event.rs

//! 同期的な「購読 → 通知」の小さな仕組みだよ📣
//!
//! `trigger` すると、その時点の購読者を購読した順に、その場で全部呼ぶ。
//! バッファも再送もなし。ハンドラの中で panic したらそのまま呼び出し元まで伝わるよ。

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// `subscribe` が返す札。`unsubscribe` に渡して購読をやめる。
pub type SubscriptionId = u32;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

/// イベントの通り道。
///
/// clone すると同じ購読者リストを共有するハンドルになる。
/// セッションが一度作ったハンドラを、新しいゲームにも渡して使い回すため。
pub struct EventHandler<T> {
    registry: Rc<RefCell<Registry<T>>>,
    dispatch_depth: Rc<Cell<usize>>,
}

impl<T> EventHandler<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry { next_id: 1, listeners: Vec::new() })),
            dispatch_depth: Rc::new(Cell::new(0)),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        id
    }

    /// 購読をやめる。知らない札なら false。
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(listener_id, _)| *listener_id != id);
        registry.listeners.len() != before
    }

    /// 今の購読者を順番に呼ぶ。
    ///
    /// 呼ぶ前にリストを写し取るので、ハンドラの中で subscribe / unsubscribe しても
    /// 今回の通知には影響しないよ。
    pub fn trigger(&self, event: &T) {
        let snapshot: Vec<Listener<T>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        let _guard = DispatchGuard::enter(&self.dispatch_depth);
        for listener in snapshot {
            listener(event);
        }
    }

    /// いま `trigger` の途中（ハンドラ実行中）か。
    pub fn is_dispatching(&self) -> bool {
        self.dispatch_depth.get() > 0
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl<T> Clone for EventHandler<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
            dispatch_depth: Rc::clone(&self.dispatch_depth),
        }
    }
}

impl<T> Default for EventHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("subscribers", &self.subscriber_count())
            .field("dispatching", &self.is_dispatching())
            .finish()
    }
}

// ハンドラが panic しても深さを戻すためのもの
struct DispatchGuard<'a> {
    depth: &'a Cell<usize>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(depth: &'a Cell<usize>) -> Self {
        depth.set(depth.get() + 1);
        Self { depth }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_run_in_subscription_order() {
        let handler: EventHandler<u32> = EventHandler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        handler.subscribe(move |value| first.borrow_mut().push(("first", *value)));
        let second = Rc::clone(&seen);
        handler.subscribe(move |value| second.borrow_mut().push(("second", *value)));

        handler.trigger(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn subscription_ids_are_small_numbers() {
        // JS には普通の number で渡したいので u32
        let handler: EventHandler<()> = EventHandler::new();
        let first: u32 = handler.subscribe(|_| {});
        let second: u32 = handler.subscribe(|_| {});
        assert_eq!((first, second), (1, 2));
        assert!(handler.unsubscribe(first));
        assert_eq!(handler.subscribe(|_| {}), 3, "消した ID は使い回さない");
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let handler: EventHandler<()> = EventHandler::new();
        let count = Rc::new(Cell::new(0));

        let counter = Rc::clone(&count);
        let id = handler.subscribe(move |_| counter.set(counter.get() + 1));

        handler.trigger(&());
        assert!(handler.unsubscribe(id));
        assert!(!handler.unsubscribe(id), "二回目は何も消えないはず");
        handler.trigger(&());

        assert_eq!(count.get(), 1);
        assert_eq!(handler.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_subscribers() {
        let handler: EventHandler<()> = EventHandler::new();
        let shared = handler.clone();
        let count = Rc::new(Cell::new(0));

        let counter = Rc::clone(&count);
        shared.subscribe(move |_| counter.set(counter.get() + 1));
        handler.trigger(&());

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn subscribing_during_trigger_waits_for_next_round() {
        let handler: EventHandler<()> = EventHandler::new();
        let late_calls = Rc::new(Cell::new(0));

        let inner_handler = handler.clone();
        let inner_calls = Rc::clone(&late_calls);
        handler.subscribe(move |_| {
            let calls = Rc::clone(&inner_calls);
            inner_handler.subscribe(move |_| calls.set(calls.get() + 1));
        });

        handler.trigger(&());
        assert_eq!(late_calls.get(), 0);

        handler.trigger(&());
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn dispatching_flag_is_visible_inside_listener() {
        let handler: EventHandler<()> = EventHandler::new();
        let observed = Rc::new(Cell::new(false));

        let probe = handler.clone();
        let flag = Rc::clone(&observed);
        handler.subscribe(move |_| flag.set(probe.is_dispatching()));

        assert!(!handler.is_dispatching());
        handler.trigger(&());
        assert!(observed.get());
        assert!(!handler.is_dispatching());
    }
}
