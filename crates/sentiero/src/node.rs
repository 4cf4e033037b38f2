//! Menu tree nodes and the ordering shared by leaves and submenus.

use std::cmp::Ordering;

use uuid::Uuid;

use crate::menu::Menu;
use crate::options::RenderOptions;
use crate::perms::{PermissionCheck, PermissionSet};

/// A leaf node: a titled link.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub(crate) id: Uuid,
    pub(crate) parent_id: Option<Uuid>,
    pub(crate) title: String,
    pub(crate) html_title: Option<String>,
    pub(crate) url: String,
    pub(crate) order: i32,
    pub(crate) permission_required: Option<PermissionSet>,
}

impl MenuItem {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Id of the owning menu. `None` only for nodes detached from any tree.
    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn permission_required(&self) -> Option<&PermissionSet> {
        self.permission_required.as_ref()
    }

    /// Label used in rendered markup; `html_title` wins over `title`.
    pub fn display_title(&self) -> &str {
        self.html_title.as_deref().unwrap_or(&self.title)
    }

    /// Render the item as a list element.
    ///
    /// Returns the empty string when a viewer is supplied, the item requires
    /// permissions, and the viewer does not hold all of them.
    pub fn render(&self, user: Option<&dyn PermissionCheck>) -> String {
        if let Some(user) = user
            && let Some(required) = &self.permission_required
            && !user.has_perms(required.as_slice())
        {
            return String::new();
        }
        let url = &self.url;
        let label = self.display_title();
        format!(r#"<li><a href="{url}">{label}</a></li>"#)
    }
}

/// A child of a menu: either a leaf item or a nested submenu.
#[derive(Debug, Clone)]
pub enum MenuNode {
    Item(MenuItem),
    Menu(Menu),
}

impl MenuNode {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Item(item) => item.id,
            Self::Menu(menu) => menu.id(),
        }
    }

    pub fn parent_id(&self) -> Option<Uuid> {
        match self {
            Self::Item(item) => item.parent_id,
            Self::Menu(menu) => menu.parent_id(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Item(item) => &item.title,
            Self::Menu(menu) => menu.title(),
        }
    }

    pub fn order(&self) -> i32 {
        match self {
            Self::Item(item) => item.order,
            Self::Menu(menu) => menu.order(),
        }
    }

    pub fn permission_required(&self) -> Option<&PermissionSet> {
        match self {
            Self::Item(item) => item.permission_required.as_ref(),
            Self::Menu(menu) => menu.permission_required(),
        }
    }

    /// Render this node for the given viewer.
    pub fn render(&self, user: Option<&dyn PermissionCheck>, opts: &RenderOptions) -> String {
        match self {
            Self::Item(item) => item.render(user),
            Self::Menu(menu) => menu.render(user, opts),
        }
    }

    fn sort_key(&self) -> (i32, &str) {
        (self.order(), self.title())
    }
}

/// Total order used for sorted insertion: numeric `order` first, then
/// lexicographic `title`. Unrelated to node identity.
pub(crate) fn compare(a: &MenuNode, b: &MenuNode) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}
