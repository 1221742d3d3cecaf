//! Configuration: nav tree, presentation settings, animation timing.
//!
//! - `types`: serde types for `.navrail/nav.toml`
//! - `settings`: loader with fallback to the built-in demo tree

mod settings;
mod types;

pub use settings::load_nav_config;
pub use types::{
    AnimationTiming, CategoryConfig, EntryConfig, IconMode, ItemConfig, NavConfig, ProfileConfig,
    SidebarSettings,
};
