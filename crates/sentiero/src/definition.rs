//! Declarative menu definitions contributed as JSON.
//!
//! Independent sources (plugins, application modules) contribute entries as
//! JSON arrays; entries nest to express submenus. A malformed source is
//! logged and skipped so one bad contributor cannot break the whole menu.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::MenuError;
use crate::menu::{Menu, NewItem, NewSubmenu};
use crate::perms::PermissionSet;

/// One declarative menu entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display label.
    pub title: String,

    /// Link target; optional for entries that only group children.
    #[serde(default)]
    pub url: Option<String>,

    /// Sort priority (default 0).
    #[serde(default)]
    pub order: i32,

    /// Optional rendered-label override.
    #[serde(default)]
    pub html_title: Option<String>,

    /// Either a single permission name or an array of names.
    #[serde(default)]
    pub permission_required: Option<PermissionSet>,

    /// Nested entries; a non-empty list makes this entry a submenu.
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    /// Parse a JSON array of entries from a named source.
    pub fn parse_array(source_name: &str, json: &str) -> Result<Vec<Self>, MenuError> {
        serde_json::from_str(json).map_err(|e| MenuError::InvalidDefinition {
            source_name: source_name.to_string(),
            details: e.to_string(),
        })
    }
}

impl Menu {
    /// Apply parsed entries to this menu, recursing into children.
    ///
    /// An entry with neither a url nor children has nothing to render and is
    /// skipped with a warning.
    pub fn extend_from_entries(&mut self, entries: Vec<MenuEntry>) {
        for entry in entries {
            if entry.children.is_empty() {
                match entry.url {
                    Some(url) => self.add_item(NewItem {
                        title: entry.title,
                        url,
                        order: entry.order,
                        html_title: entry.html_title,
                        permission_required: entry.permission_required,
                    }),
                    None => warn!(
                        title = %entry.title,
                        "menu entry has neither url nor children, skipping"
                    ),
                }
            } else {
                let submenu = self.create_submenu(NewSubmenu {
                    title: entry.title,
                    url: entry.url,
                    order: entry.order,
                    html_title: entry.html_title,
                    permission_required: entry.permission_required,
                });
                submenu.extend_from_entries(entry.children);
            }
        }
    }

    /// Apply JSON entry arrays from several named sources.
    ///
    /// Each source is a `(name, json)` pair. Sources that fail to parse are
    /// logged and skipped; the remaining sources still apply, and everything
    /// lands at its sorted position regardless of source order.
    pub fn extend_from_json(&mut self, sources: Vec<(String, String)>) {
        for (name, json) in sources {
            match MenuEntry::parse_array(&name, &json) {
                Ok(entries) => {
                    debug!(source = %name, entries = entries.len(), "loaded menu entries");
                    self.extend_from_entries(entries);
                }
                Err(e) => warn!(source = %name, error = %e, "failed to parse menu entries"),
            }
        }
    }
}
