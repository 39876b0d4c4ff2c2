//! One-time registration of the scroll plugin

use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

static REGISTER: Once = Once::new();
static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Run `install` the first time this is called in the process.
///
/// Returns `true` only for the call that performed the installation; every
/// later mount gets `false` and `install` is dropped unused.
pub fn register_scroll_plugin(install: impl FnOnce()) -> bool {
    let mut installed_now = false;
    REGISTER.call_once(|| {
        install();
        REGISTERED.store(true, Ordering::Release);
        installed_now = true;
    });
    installed_now
}

pub fn is_scroll_plugin_registered() -> bool {
    REGISTERED.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_register_runs_installer_once() {
        static INSTALLS: AtomicUsize = AtomicUsize::new(0);

        for _ in 0..3 {
            register_scroll_plugin(|| {
                INSTALLS.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert!(is_scroll_plugin_registered());
        assert!(INSTALLS.load(Ordering::SeqCst) <= 1);
        assert!(!register_scroll_plugin(|| panic!("installer ran twice")));
    }
}
