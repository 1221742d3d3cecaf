//! navrail-app - Application state and orchestration for navrail
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the message vocabulary, the update dispatch, the collapse and
//! disclosure controllers, the animation primitives, and the persisted
//! collapse preference.

pub mod animate;
pub mod collapse;
pub mod config;
pub mod disclosure;
pub mod handler;
pub mod hover;
pub mod input_key;
pub mod message;
pub mod prefs;
pub mod state;

// Re-export primary types
pub use animate::{BadgeRelocator, Geometry, IndicatorAnimator, Tween};
pub use collapse::CollapseController;
pub use config::{load_nav_config, NavConfig, SidebarSettings};
pub use disclosure::DisclosureController;
pub use handler::{update, update_at, UpdateResult};
pub use hover::{HitTarget, HoverState};
pub use input_key::InputKey;
pub use message::{Message, MouseInput, MouseKind};
pub use prefs::PersistedPreference;
pub use state::{AppState, HitMap, HitRegion, Row};
