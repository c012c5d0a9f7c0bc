//! Page Lifetime Guards
//!
//! A page creates a [`MountGuard`] when it mounts and cancels it when it
//! unmounts. Async work started by the page holds a [`MountToken`] and only
//! writes its result back while the token is live.

use std::cell::Cell;
use std::rc::Rc;

/// Owned by a mounted page; cancels all its tokens on `cancel` or drop
#[derive(Debug)]
pub struct MountGuard {
    alive: Rc<Cell<bool>>,
    label: &'static str,
}

/// Cheap handle checked by async tasks before touching page state
#[derive(Debug, Clone)]
pub struct MountToken {
    alive: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new(label: &'static str) -> Self {
        tracing::trace!(page = label, "mounted");
        Self {
            alive: Rc::new(Cell::new(true)),
            label,
        }
    }

    pub fn token(&self) -> MountToken {
        MountToken {
            alive: Rc::clone(&self.alive),
        }
    }

    pub fn cancel(&self) {
        if self.alive.replace(false) {
            tracing::trace!(page = self.label, "unmounted, pending work cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        !self.alive.get()
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl MountToken {
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Run `f` only while the owning page is still mounted
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_alive() {
            Some(f())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_follows_guard() {
        let guard = MountGuard::new("dashboard");
        let token = guard.token();
        assert!(token.is_alive());
        assert_eq!(token.run(|| 5), Some(5));

        guard.cancel();
        assert!(guard.is_cancelled());
        assert!(!token.is_alive());
        assert_eq!(token.run(|| 5), None);
    }

    #[test]
    fn test_drop_cancels() {
        let token = {
            let guard = MountGuard::new("activity");
            guard.token()
        };
        assert!(!token.is_alive());
    }

    #[test]
    fn test_late_result_is_discarded() {
        let guard = MountGuard::new("dashboard");
        let token = guard.token();
        let mut state = None;

        drop(guard);
        token.run(|| state = Some("ready"));
        assert_eq!(state, None);
    }
}
