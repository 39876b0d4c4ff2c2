pub mod icon;
pub mod pages;
pub mod planet;
pub mod scroll_animator;
pub mod sections;

pub use icon::{Icon, icons};
pub use planet::{PlanetHandles, PlanetScene, PlanetSection};
pub use scroll_animator::use_scroll_animator;
pub use sections::SectionRenderer;
