//! Notification hooks fired on logging actions
//!
//! External code can attach handlers to three events: an info entry was
//! written, an error entry was written (payload: the numeric error code), and
//! the log file was cleared. Handlers run synchronously, in registration
//! order, on the thread that performed the triggering call.

/// Identifies a registered hook so it can later be removed.
///
/// Ids are unique across all three hook kinds within one logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

type InfoHook = Box<dyn FnMut()>;
type ErrorHook = Box<dyn FnMut(i32)>;
type ClearedHook = Box<dyn FnMut()>;

/// Per-logger registry of event handlers.
#[derive(Default)]
pub(crate) struct Hooks {
    next_id: u64,
    info_logged: Vec<(HookId, InfoHook)>,
    error_logged: Vec<(HookId, ErrorHook)>,
    log_cleared: Vec<(HookId, ClearedHook)>,
}

impl Hooks {
    fn next_id(&mut self) -> HookId {
        self.next_id += 1;
        HookId(self.next_id)
    }

    pub(crate) fn on_info_logged(&mut self, handler: impl FnMut() + 'static) -> HookId {
        let id = self.next_id();
        self.info_logged.push((id, Box::new(handler)));
        id
    }

    pub(crate) fn on_error_logged(&mut self, handler: impl FnMut(i32) + 'static) -> HookId {
        let id = self.next_id();
        self.error_logged.push((id, Box::new(handler)));
        id
    }

    pub(crate) fn on_log_cleared(&mut self, handler: impl FnMut() + 'static) -> HookId {
        let id = self.next_id();
        self.log_cleared.push((id, Box::new(handler)));
        id
    }

    /// Detach a handler. Returns `false` if the id is unknown.
    pub(crate) fn remove(&mut self, id: HookId) -> bool {
        let before =
            self.info_logged.len() + self.error_logged.len() + self.log_cleared.len();
        self.info_logged.retain(|(h, _)| *h != id);
        self.error_logged.retain(|(h, _)| *h != id);
        self.log_cleared.retain(|(h, _)| *h != id);
        self.info_logged.len() + self.error_logged.len() + self.log_cleared.len() != before
    }

    pub(crate) fn fire_info_logged(&mut self) {
        for (_, handler) in self.info_logged.iter_mut() {
            handler();
        }
    }

    pub(crate) fn fire_error_logged(&mut self, code: i32) {
        for (_, handler) in self.error_logged.iter_mut() {
            handler(code);
        }
    }

    pub(crate) fn fire_log_cleared(&mut self) {
        for (_, handler) in self.log_cleared.iter_mut() {
            handler();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_hooks_fire_in_registration_order() {
        let mut hooks = Hooks::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        hooks.on_info_logged(move || first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        hooks.on_info_logged(move || second.borrow_mut().push("second"));

        hooks.fire_info_logged();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_error_hook_receives_code() {
        let mut hooks = Hooks::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        hooks.on_error_logged(move |code| sink.borrow_mut().push(code));

        hooks.fire_error_logged(0);
        hooks.fire_error_logged(404);
        assert_eq!(*seen.borrow(), vec![0, 404]);
    }

    #[test]
    fn test_removed_hook_stops_firing() {
        let mut hooks = Hooks::default();
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        let id = hooks.on_log_cleared(move || *sink.borrow_mut() += 1);

        hooks.fire_log_cleared();
        assert!(hooks.remove(id));
        hooks.fire_log_cleared();

        assert_eq!(*count.borrow(), 1);
        assert!(!hooks.remove(id));
    }

    #[test]
    fn test_ids_unique_across_hook_kinds() {
        let mut hooks = Hooks::default();
        let a = hooks.on_info_logged(|| {});
        let b = hooks.on_error_logged(|_| {});
        let c = hooks.on_log_cleared(|| {});
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_remove_only_detaches_matching_hook() {
        let mut hooks = Hooks::default();
        let count = Rc::new(RefCell::new(0));

        let keep = Rc::clone(&count);
        hooks.on_info_logged(move || *keep.borrow_mut() += 1);
        let drop_me = Rc::clone(&count);
        let id = hooks.on_info_logged(move || *drop_me.borrow_mut() += 10);

        assert!(hooks.remove(id));
        hooks.fire_info_logged();
        assert_eq!(*count.borrow(), 1);
    }
}
