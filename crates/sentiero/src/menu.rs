//! Ordered menu containers: sorted insertion and recursive rendering.

use std::cmp::Ordering;

use uuid::Uuid;

use crate::node::{self, MenuItem, MenuNode};
use crate::options::RenderOptions;
use crate::perms::{PermissionCheck, PermissionSet};

/// Input for adding a leaf item to a menu.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub title: String,
    pub url: String,
    pub order: i32,
    pub html_title: Option<String>,
    pub permission_required: Option<PermissionSet>,
}

/// Input for creating a nested submenu.
#[derive(Debug, Clone, Default)]
pub struct NewSubmenu {
    pub title: String,
    pub url: Option<String>,
    pub order: i32,
    pub html_title: Option<String>,
    pub permission_required: Option<PermissionSet>,
}

/// A container node owning an ordered sequence of children.
///
/// Children are kept sorted ascending by `(order, title)` from insertion on;
/// there is no separate sort pass, and nodes are never removed or reordered
/// after creation. Trees are built once at application startup and treated
/// as read-only afterwards; nothing here locks, so mutation during the read
/// phase is the integrator's responsibility to avoid.
#[derive(Debug, Clone)]
pub struct Menu {
    id: Uuid,
    parent_id: Option<Uuid>,
    title: String,
    html_title: Option<String>,
    url: Option<String>,
    order: i32,
    permission_required: Option<PermissionSet>,
    children: Vec<MenuNode>,
}

impl Menu {
    /// Create a root menu with no url and default order.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            parent_id: None,
            title: title.into(),
            html_title: None,
            url: None,
            order: 0,
            permission_required: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Id of the owning menu; `None` for a root.
    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
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

    /// The children, in `(order, title)` order.
    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    /// Insert a new leaf item at its sorted position.
    pub fn add_item(&mut self, input: NewItem) {
        let item = MenuItem {
            id: Uuid::now_v7(),
            parent_id: Some(self.id),
            title: input.title,
            html_title: input.html_title,
            url: input.url,
            order: input.order,
            permission_required: input.permission_required,
        };
        let node = MenuNode::Item(item);
        let at = self.insert_position(&node);
        self.children.insert(at, node);
    }

    /// Insert a new submenu at its sorted position and return it so its own
    /// children can subsequently be added.
    pub fn create_submenu(&mut self, input: NewSubmenu) -> &mut Menu {
        let menu = Menu {
            id: Uuid::now_v7(),
            parent_id: Some(self.id),
            title: input.title,
            html_title: input.html_title,
            url: input.url,
            order: input.order,
            permission_required: input.permission_required,
            children: Vec::new(),
        };
        let node = MenuNode::Menu(menu);
        let at = self.insert_position(&node);
        self.children.insert(at, node);
        match &mut self.children[at] {
            MenuNode::Menu(menu) => menu,
            MenuNode::Item(_) => unreachable!("a submenu was inserted at this index"),
        }
    }

    // First position whose existing child sorts strictly greater; append
    // when none does, so equal keys keep insertion order.
    fn insert_position(&self, node: &MenuNode) -> usize {
        self.children
            .iter()
            .position(|existing| node::compare(node, existing) == Ordering::Less)
            .unwrap_or(self.children.len())
    }

    /// Find a node anywhere in this menu's subtree by id.
    pub fn find(&self, id: Uuid) -> Option<&MenuNode> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            if let MenuNode::Menu(menu) = child
                && let Some(found) = menu.find(id)
            {
                return Some(found);
            }
        }
        None
    }

    /// Render this menu as a list element wrapping its children.
    ///
    /// When `opts.hide_empty` is set and every child filtered away, the
    /// whole menu renders as the empty string, title and wrapper included.
    /// The menu's own permission requirement is consulted by its parent's
    /// filter, not here.
    pub fn render(&self, user: Option<&dyn PermissionCheck>, opts: &RenderOptions) -> String {
        let items = self.render_children(user, opts);
        if opts.hide_empty && items.is_empty() {
            return String::new();
        }
        let label = self.display_title();
        let title = match &self.url {
            Some(url) => format!(r#"<a href="{url}">{label}</a>"#),
            None => label.to_string(),
        };
        format!("<li>{title}<ul>{items}</ul></li>")
    }

    /// Concatenated renderings of the visible children, in sorted order.
    ///
    /// With a viewer, children whose permission requirement the viewer does
    /// not satisfy are dropped before rendering; without one, all children
    /// render unfiltered. This is also the top-level entry point: a root
    /// menu bar has no wrapper of its own.
    pub fn render_children(
        &self,
        user: Option<&dyn PermissionCheck>,
        opts: &RenderOptions,
    ) -> String {
        let mut html = String::new();
        for child in &self.children {
            if let Some(user) = user
                && let Some(required) = child.permission_required()
                && !user.has_perms(required.as_slice())
            {
                continue;
            }
            html.push_str(&child.render(user, opts));
        }
        html
    }
}
