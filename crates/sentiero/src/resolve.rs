//! Symbolic URL resolution and view registration.
//!
//! Views register themselves in a menu without hard-coding their URL: the
//! menu asks a [`UrlResolver`] for the concrete path and inserts an ordinary
//! leaf item, handing the view back unchanged.

use anyhow::Result;

use crate::error::MenuError;
use crate::menu::{Menu, NewItem};
use crate::perms::PermissionSet;

/// Resolves a symbolic view name to a concrete URL path.
///
/// Implemented by the integrating application on top of whatever routing
/// table it keeps; this crate never validates the returned URL.
pub trait UrlResolver {
    fn resolve(&self, urlname: &str) -> Result<String>;
}

/// A view that can be registered in a menu by name.
pub trait NamedView {
    /// Symbolic name handed to the resolver.
    fn urlname(&self) -> &str;

    /// Permission requirement the view declares for itself, if any.
    fn permission_required(&self) -> Option<PermissionSet> {
        None
    }
}

/// Registration input for [`Menu::attach`].
#[derive(Debug, Clone, Default)]
pub struct ViewEntry {
    pub title: String,
    pub order: i32,
    pub html_title: Option<String>,
    /// Overrides the view-declared requirement when set.
    pub permission_required: Option<PermissionSet>,
}

impl Menu {
    /// Resolve a view's URL and insert it as a leaf item.
    ///
    /// The explicit permission requirement in `entry` wins; otherwise the
    /// view-declared one applies. The view is returned unchanged so it can
    /// keep serving requests as before.
    pub fn attach<V: NamedView>(
        &mut self,
        resolver: &dyn UrlResolver,
        view: V,
        entry: ViewEntry,
    ) -> Result<V, MenuError> {
        let url = resolver
            .resolve(view.urlname())
            .map_err(|source| MenuError::Resolve {
                urlname: view.urlname().to_string(),
                source,
            })?;
        let permission_required = entry
            .permission_required
            .or_else(|| view.permission_required());
        self.add_item(NewItem {
            title: entry.title,
            url,
            order: entry.order,
            html_title: entry.html_title,
            permission_required,
        });
        Ok(view)
    }
}
