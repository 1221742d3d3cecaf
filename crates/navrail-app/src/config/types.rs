//! Configuration types for `.navrail/nav.toml`.

use std::time::Duration;

use navrail_core::prelude::*;
use navrail_core::{NavCategory, NavEntry, NavItem, NavTree, Profile};
use serde::{Deserialize, Serialize};

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconMode {
    /// Safe characters that work in all terminals
    #[default]
    Unicode,
    /// Rich Nerd Font glyphs (requires a Nerd Font installed)
    NerdFonts,
}

/// Explicit animation/tooltip timing, in milliseconds.
///
/// Durations are configuration handed to the animators, never recovered
/// from the presentation layer at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    pub indicator_ms: u64,
    pub width_ms: u64,
    pub badge_ms: u64,
    pub tooltip_delay_ms: u64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            indicator_ms: 400,
            width_ms: 400,
            badge_ms: 400,
            tooltip_delay_ms: 500,
        }
    }
}

impl AnimationTiming {
    pub fn indicator(&self) -> Duration {
        Duration::from_millis(self.indicator_ms)
    }

    pub fn width(&self) -> Duration {
        Duration::from_millis(self.width_ms)
    }

    pub fn badge(&self) -> Duration {
        Duration::from_millis(self.badge_ms)
    }

    pub fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_delay_ms)
    }
}

/// Rail presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarSettings {
    pub icons: IconMode,
    /// Rail width in cells while collapsed (icon-only)
    pub collapsed_width: u16,
    /// Rail width in cells while expanded (icon + label)
    pub expanded_width: u16,
    pub timing: AnimationTiming,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            collapsed_width: 8,
            expanded_width: 28,
            timing: AnimationTiming::default(),
        }
    }
}

/// One entry in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub route: String,
    pub icon: String,
    pub label: String,
    #[serde(default)]
    pub notifications: u32,
}

/// One category in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub id: String,
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub children: Vec<EntryConfig>,
}

/// Top-level item, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ItemConfig {
    Entry(EntryConfig),
    Category(CategoryConfig),
    Separator {
        #[serde(default)]
        title: Option<String>,
    },
}

/// Footer profile block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
}

/// Root of `.navrail/nav.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub sidebar: SidebarSettings,
    #[serde(rename = "item")]
    pub items: Vec<ItemConfig>,
    pub profile: Option<ProfileConfig>,
}

impl Default for NavConfig {
    /// Built-in demo tree, used when no config file exists.
    fn default() -> Self {
        Self {
            sidebar: SidebarSettings::default(),
            items: vec![
                ItemConfig::Entry(EntryConfig {
                    route: "/".to_string(),
                    icon: "home".to_string(),
                    label: "Home".to_string(),
                    notifications: 0,
                }),
                ItemConfig::Entry(EntryConfig {
                    route: "/dashboard".to_string(),
                    icon: "chart".to_string(),
                    label: "Dashboard".to_string(),
                    notifications: 0,
                }),
                ItemConfig::Entry(EntryConfig {
                    route: "/inbox".to_string(),
                    icon: "inbox".to_string(),
                    label: "Inbox".to_string(),
                    notifications: 150,
                }),
                ItemConfig::Separator {
                    title: Some("Workspace".to_string()),
                },
                ItemConfig::Category(CategoryConfig {
                    id: "docs".to_string(),
                    title: "Docs".to_string(),
                    icon: "book".to_string(),
                    children: vec![
                        EntryConfig {
                            route: "/docs/api".to_string(),
                            icon: "code".to_string(),
                            label: "API".to_string(),
                            notifications: 0,
                        },
                        EntryConfig {
                            route: "/docs/guides".to_string(),
                            icon: "compass".to_string(),
                            label: "Guides".to_string(),
                            notifications: 0,
                        },
                    ],
                }),
                ItemConfig::Category(CategoryConfig {
                    id: "projects".to_string(),
                    title: "Projects".to_string(),
                    icon: "folder".to_string(),
                    children: vec![
                        EntryConfig {
                            route: "/projects/active".to_string(),
                            icon: "bolt".to_string(),
                            label: "Active".to_string(),
                            notifications: 4,
                        },
                        EntryConfig {
                            route: "/projects/archive".to_string(),
                            icon: "box".to_string(),
                            label: "Archive".to_string(),
                            notifications: 0,
                        },
                    ],
                }),
                ItemConfig::Separator { title: None },
                ItemConfig::Entry(EntryConfig {
                    route: "/settings".to_string(),
                    icon: "settings".to_string(),
                    label: "Settings".to_string(),
                    notifications: 0,
                }),
            ],
            profile: Some(ProfileConfig {
                name: "Johnathan Doeghy".to_string(),
                email: "email@gmail.com".to_string(),
            }),
        }
    }
}

impl NavConfig {
    /// Build the immutable [`NavTree`] from the configured items.
    pub fn build_tree(&self) -> Result<NavTree> {
        let items = self
            .items
            .iter()
            .map(|item| match item {
                ItemConfig::Entry(entry) => NavItem::Entry(to_entry(entry)),
                ItemConfig::Category(category) => NavItem::Category(NavCategory {
                    id: category.id.clone(),
                    title: category.title.clone(),
                    icon: category.icon.clone(),
                    children: category.children.iter().map(to_entry).collect(),
                }),
                ItemConfig::Separator { title } => NavItem::Separator {
                    title: title.clone(),
                },
            })
            .collect();
        NavTree::new(items)
    }

    pub fn profile(&self) -> Option<Profile> {
        self.profile.as_ref().map(|p| Profile {
            name: p.name.clone(),
            email: p.email.clone(),
        })
    }
}

fn to_entry(config: &EntryConfig) -> NavEntry {
    NavEntry::new(&config.route, &config.icon, &config.label)
        .with_notifications(config.notifications)
}
