//! A generic reversible-history container.
//!
//! Wraps any domain transition function `fn(&S, &A) -> S` into a
//! `{past, present, future}` snapshot record. The container never inspects
//! domain action shapes; undo and redo are its own two control operations.
//! Each domain dispatch pushes the outgoing present onto the past stack
//! and clears the future, so redo history dies the moment a new edit
//! lands.

use std::collections::VecDeque;
use std::marker::PhantomData;

/// Snapshot history around a current value.
///
/// Both stacks are ordered newest-first: `past` front is the state one
/// undo away, `future` top is the state one redo away.
pub struct History<S, A, F = fn(&S, &A) -> S>
where
    F: Fn(&S, &A) -> S,
{
    reduce: F,
    past: VecDeque<S>,
    present: S,
    future: Vec<S>,
    /// Maximum number of retained past snapshots; `None` is unbounded.
    limit: Option<usize>,
    _action: PhantomData<fn(&A)>,
}

impl<S, A, F> History<S, A, F>
where
    F: Fn(&S, &A) -> S,
{
    /// Unbounded history around `initial`.
    pub fn new(initial: S, reduce: F) -> Self {
        Self {
            reduce,
            past: VecDeque::new(),
            present: initial,
            future: Vec::new(),
            limit: None,
            _action: PhantomData,
        }
    }

    /// History retaining at most `limit` past snapshots; the oldest is
    /// dropped first.
    pub fn with_limit(initial: S, reduce: F, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(initial, reduce)
        }
    }

    pub fn present(&self) -> &S {
        &self.present
    }

    /// Apply a domain action through the wrapped reducer.
    pub fn dispatch(&mut self, action: &A) {
        let next = (self.reduce)(&self.present, action);
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_front(previous);
        if let Some(limit) = self.limit {
            self.past.truncate(limit);
        }
        self.future.clear();
    }

    /// Step back one snapshot. No-op on empty history; returns whether a
    /// step was taken.
    pub fn undo(&mut self) -> bool {
        match self.past.pop_front() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push(current);
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. No-op when nothing has been undone.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.present, next);
                self.past.push_front(current);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of retained past snapshots.
    pub fn depth(&self) -> usize {
        self.past.len()
    }

    /// Drop all history, keeping the present value.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: &i32, action: &i32) -> i32 {
        state + action
    }

    #[test]
    fn dispatch_then_undo_restores_initial() {
        let mut history = History::new(0, add);
        history.dispatch(&5);
        history.dispatch(&7);
        assert_eq!(*history.present(), 12);
        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(*history.present(), 0);
        assert!(!history.undo());
    }

    #[test]
    fn new_edit_clears_future() {
        let mut history = History::new(0, add);
        history.dispatch(&1);
        history.undo();
        assert!(history.can_redo());
        history.dispatch(&2);
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(*history.present(), 2);
    }

    #[test]
    fn limit_drops_oldest_snapshot() {
        let mut history = History::with_limit(0, add, 2);
        history.dispatch(&1);
        history.dispatch(&2);
        history.dispatch(&4);
        assert_eq!(history.depth(), 2);
        assert!(history.undo());
        assert!(history.undo());
        // The initial 0 fell off the back; the oldest retained state
        // remains.
        assert_eq!(*history.present(), 1);
        assert!(!history.undo());
    }
}
