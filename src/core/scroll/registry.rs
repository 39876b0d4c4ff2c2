//! Thread-local registry of live scroll triggers

use std::cell::RefCell;
use std::collections::BTreeMap;

use derive_more::Display;

type RefreshFn = Box<dyn FnMut()>;

/// Handle to a registered trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("trigger-{_0}")]
pub struct TriggerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    // A slot is `None` while its callback is running
    triggers: BTreeMap<TriggerId, Option<RefreshFn>>,
}

thread_local! {
    static TRIGGERS: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Register a refresh callback and return its id
pub fn register(refresh: impl FnMut() + 'static) -> TriggerId {
    TRIGGERS.with(|registry| {
        let mut registry = registry.borrow_mut();
        registry.next_id += 1;
        let id = TriggerId(registry.next_id);
        registry.triggers.insert(id, Some(Box::new(refresh)));
        id
    })
}

/// Run the callback of one trigger. Returns `false` if the id is not live.
pub fn refresh(id: TriggerId) -> bool {
    let callback = TRIGGERS.with(|registry| {
        registry
            .borrow_mut()
            .triggers
            .get_mut(&id)
            .and_then(Option::take)
    });
    let Some(mut callback) = callback else {
        return false;
    };

    callback();

    // The callback may have killed its own trigger
    TRIGGERS.with(|registry| {
        if let Some(slot) = registry.borrow_mut().triggers.get_mut(&id) {
            *slot = Some(callback);
        }
    });
    true
}

/// Run every live trigger in registration order
pub fn refresh_all() {
    let ids: Vec<TriggerId> =
        TRIGGERS.with(|registry| registry.borrow().triggers.keys().copied().collect());
    for id in ids {
        refresh(id);
    }
}

/// Remove a trigger, dropping its callback. Returns `false` if it was already gone.
pub fn kill(id: TriggerId) -> bool {
    let removed = TRIGGERS.with(|registry| registry.borrow_mut().triggers.remove(&id));
    removed.is_some()
}

/// Remove every trigger
pub fn kill_all() {
    let removed = TRIGGERS.with(|registry| std::mem::take(&mut registry.borrow_mut().triggers));
    drop(removed);
}

/// Number of live triggers
pub fn active_count() -> usize {
    TRIGGERS.with(|registry| registry.borrow().triggers.len())
}
