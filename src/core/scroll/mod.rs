//! Scroll-linked triggers
//!
//! A trigger maps the geometry of a pinned section to a progress value and
//! hands it to a callback. Triggers live in a thread-local registry so the
//! view layer can tear them down by id when a scene unmounts.

mod plugin;
mod registry;
mod trigger;

pub use plugin::{is_scroll_plugin_registered, register_scroll_plugin};
pub use registry::{TriggerId, active_count, kill, kill_all, refresh, refresh_all, register};
pub use trigger::{ScrollTrigger, SectionRect};
