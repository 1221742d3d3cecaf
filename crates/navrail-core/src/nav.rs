//! Navigation data model.
//!
//! A [`NavTree`] is the static entry configuration supplied by the caller at
//! composition time: a flat sequence of items, where an item is a link
//! entry, a nested category of entries, or a separator. The tree itself is
//! immutable at runtime; which entry is active is derived from the current
//! path on every navigation event.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::route;

/// Stable identity of a nav entry, assigned in flatten order at tree
/// construction. Survives collapse/expand so animators can keep tracking
/// the same logical entry through presentation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Route the entry navigates to (e.g. `/settings`)
    pub route: String,
    /// Icon name, resolved by the presentation layer's icon table
    pub icon: String,
    /// Visible label (hidden while collapsed)
    pub label: String,
    /// Notification count; `0` renders no badge
    pub notifications: u32,
}

impl NavEntry {
    pub fn new(route: impl Into<String>, icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            icon: icon.into(),
            label: label.into(),
            notifications: 0,
        }
    }

    pub fn with_notifications(mut self, count: u32) -> Self {
        self.notifications = count;
        self
    }
}

/// A disclosable group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCategory {
    /// Identifier used by the disclosure state (unique within the tree)
    pub id: String,
    /// Visible title (hidden while collapsed)
    pub title: String,
    /// Icon name for the category header
    pub icon: String,
    pub children: Vec<NavEntry>,
}

/// One item in the sidebar's top-level sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Entry(NavEntry),
    Category(NavCategory),
    /// Horizontal rule between groups; the optional title hides while
    /// collapsed
    Separator { title: Option<String> },
}

/// Footer profile block (static display data, no logic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Profile {
    /// Initials for the avatar fallback, e.g. "Johnathan Doeghy" -> "JD"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Where a nav entry's EntryId points inside the item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntrySlot {
    TopLevel { item: usize },
    Child { item: usize, child: usize },
}

/// The ordered navigation tree with stable entry identities.
#[derive(Debug, Clone)]
pub struct NavTree {
    items: Vec<NavItem>,
    slots: Vec<EntrySlot>,
}

impl NavTree {
    /// Build a tree, assigning [`EntryId`]s in flatten order.
    ///
    /// Fails when two categories share an id; the disclosure state could
    /// not tell them apart.
    pub fn new(items: Vec<NavItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if let NavItem::Category(category) = item {
                if !seen.insert(category.id.clone()) {
                    return Err(Error::DuplicateCategory {
                        id: category.id.clone(),
                    });
                }
            }
        }

        let mut slots = Vec::new();
        for (item_idx, item) in items.iter().enumerate() {
            match item {
                NavItem::Entry(_) => slots.push(EntrySlot::TopLevel { item: item_idx }),
                NavItem::Category(category) => {
                    for child_idx in 0..category.children.len() {
                        slots.push(EntrySlot::Child {
                            item: item_idx,
                            child: child_idx,
                        });
                    }
                }
                NavItem::Separator { .. } => {}
            }
        }

        Ok(Self { items, slots })
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Number of link entries (categories flattened)
    pub fn entry_count(&self) -> usize {
        self.slots.len()
    }

    /// Look up an entry by id
    pub fn entry(&self, id: EntryId) -> Option<&NavEntry> {
        let slot = self.slots.get(id.index())?;
        match *slot {
            EntrySlot::TopLevel { item } => match &self.items[item] {
                NavItem::Entry(entry) => Some(entry),
                _ => None,
            },
            EntrySlot::Child { item, child } => match &self.items[item] {
                NavItem::Category(category) => category.children.get(child),
                _ => None,
            },
        }
    }

    /// The category an entry belongs to, if it is nested
    pub fn parent_category(&self, id: EntryId) -> Option<&NavCategory> {
        match *self.slots.get(id.index())? {
            EntrySlot::Child { item, .. } => match &self.items[item] {
                NavItem::Category(category) => Some(category),
                _ => None,
            },
            EntrySlot::TopLevel { .. } => None,
        }
    }

    /// Iterate all entries in flatten order with their ids
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &NavEntry)> {
        (0..self.slots.len()).filter_map(move |index| {
            let id = EntryId(index);
            self.entry(id).map(|entry| (id, entry))
        })
    }

    /// Ids of a category's children in flatten order
    pub fn category_children(&self, category_id: &str) -> Vec<EntryId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match *slot {
                EntrySlot::Child { item, .. } => match &self.items[item] {
                    NavItem::Category(category) if category.id == category_id => {
                        Some(EntryId(index))
                    }
                    _ => None,
                },
                EntrySlot::TopLevel { .. } => None,
            })
            .collect()
    }

    /// Look up a category by id
    pub fn category(&self, category_id: &str) -> Option<&NavCategory> {
        self.items.iter().find_map(|item| match item {
            NavItem::Category(category) if category.id == category_id => Some(category),
            _ => None,
        })
    }

    /// Resolve the active entry for the current path (longest-prefix policy,
    /// exact match for the root route).
    pub fn resolve_active(&self, path: &str) -> Option<EntryId> {
        let routes = (0..self.slots.len())
            .filter_map(|index| self.entry(EntryId(index)))
            .map(|entry| entry.route.as_str());
        route::resolve_active(routes, path).map(EntryId)
    }

    /// Id of the first entry, if any (initial cursor position)
    pub fn first_entry(&self) -> Option<EntryId> {
        (!self.slots.is_empty()).then_some(EntryId(0))
    }

    /// Id for a flatten-order index, bounds-checked
    pub fn entry_id(&self, index: usize) -> Option<EntryId> {
        (index < self.slots.len()).then_some(EntryId(index))
    }
}

// ─────────────────────────────────────────────────────────────────
// Badges
// ─────────────────────────────────────────────────────────────────

/// Overflow label for counts of 100 or more
pub const BADGE_OVERFLOW: &str = "99+";

/// Text for a notification badge: exact count for 1..=99, the overflow
/// label above, nothing for zero.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some(BADGE_OVERFLOW.to_string()),
    }
}

/// The badge's anchor point within an entry row. A pure function of the
/// collapsed state; the same logical badge moves between anchors rather
/// than being remounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeAnchor {
    /// Pinned to the icon's corner (compact dot, no numeric text)
    IconCorner,
    /// Pinned to the row's trailing edge (pill with numeric text)
    TrailingEdge,
}

impl BadgeAnchor {
    pub fn for_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Self::IconCorner
        } else {
            Self::TrailingEdge
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> NavTree {
        NavTree::new(vec![
            NavItem::Entry(NavEntry::new("/", "home", "Home")),
            NavItem::Entry(NavEntry::new("/inbox", "inbox", "Inbox").with_notifications(3)),
            NavItem::Separator {
                title: Some("Workspace".to_string()),
            },
            NavItem::Category(NavCategory {
                id: "docs".to_string(),
                title: "Docs".to_string(),
                icon: "book".to_string(),
                children: vec![
                    NavEntry::new("/docs/api", "code", "API"),
                    NavEntry::new("/docs/guides", "compass", "Guides"),
                ],
            }),
            NavItem::Entry(NavEntry::new("/settings", "settings", "Settings")),
        ])
        .unwrap()
    }

    #[test]
    fn test_entry_ids_follow_flatten_order() {
        let tree = sample_tree();
        let labels: Vec<&str> = tree.entries().map(|(_, e)| e.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Inbox", "API", "Guides", "Settings"]);
        assert_eq!(tree.entry_count(), 5);
    }

    #[test]
    fn test_entry_lookup_roundtrip() {
        let tree = sample_tree();
        for (id, entry) in tree.entries() {
            assert_eq!(tree.entry(id), Some(entry));
        }
    }

    #[test]
    fn test_parent_category() {
        let tree = sample_tree();
        let (api_id, _) = tree
            .entries()
            .find(|(_, e)| e.route == "/docs/api")
            .unwrap();
        assert_eq!(tree.parent_category(api_id).unwrap().id, "docs");

        let (home_id, _) = tree.entries().find(|(_, e)| e.route == "/").unwrap();
        assert!(tree.parent_category(home_id).is_none());
    }

    #[test]
    fn test_category_children() {
        let tree = sample_tree();
        let children = tree.category_children("docs");
        assert_eq!(children.len(), 2);
        assert_eq!(tree.entry(children[0]).unwrap().route, "/docs/api");
        assert_eq!(tree.entry(children[1]).unwrap().route, "/docs/guides");
    }

    #[test]
    fn test_resolve_active_nested_entry() {
        let tree = sample_tree();
        let active = tree.resolve_active("/docs/api/reference").unwrap();
        assert_eq!(tree.entry(active).unwrap().route, "/docs/api");
    }

    #[test]
    fn test_resolve_active_settings_descendant() {
        // Entries [{route:"/"}, {route:"/settings"}], path "/settings/profile"
        // -> Settings is active, Home is not
        let tree = sample_tree();
        let active = tree.resolve_active("/settings/profile").unwrap();
        assert_eq!(tree.entry(active).unwrap().route, "/settings");
    }

    #[test]
    fn test_resolve_active_root_exact_only() {
        let tree = sample_tree();
        let active = tree.resolve_active("/").unwrap();
        assert_eq!(tree.entry(active).unwrap().route, "/");
        assert!(tree.resolve_active("/unknown").is_none());
    }

    #[test]
    fn test_duplicate_category_ids_rejected() {
        let category = NavCategory {
            id: "docs".to_string(),
            title: "Docs".to_string(),
            icon: "book".to_string(),
            children: vec![],
        };
        let result = NavTree::new(vec![
            NavItem::Category(category.clone()),
            NavItem::Category(category),
        ]);
        assert!(matches!(result, Err(Error::DuplicateCategory { .. })));
    }

    #[test]
    fn test_profile_initials() {
        let profile = Profile {
            name: "Johnathan Doeghy".to_string(),
            email: "email@gmail.com".to_string(),
        };
        assert_eq!(profile.initials(), "JD");

        let single = Profile {
            name: "plato".to_string(),
            email: "p@academy.gr".to_string(),
        };
        assert_eq!(single.initials(), "P");
    }

    #[test]
    fn test_badge_label_rules() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(1), Some("1".to_string()));
        assert_eq!(badge_label(99), Some("99".to_string()));
        assert_eq!(badge_label(100), Some("99+".to_string()));
        assert_eq!(badge_label(150), Some("99+".to_string()));
    }

    #[test]
    fn test_badge_anchor_from_collapsed() {
        assert_eq!(BadgeAnchor::for_collapsed(true), BadgeAnchor::IconCorner);
        assert_eq!(BadgeAnchor::for_collapsed(false), BadgeAnchor::TrailingEdge);
    }
}
