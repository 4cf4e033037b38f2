//! Sentiero builds hierarchical navigation menus and renders them as nested
//! HTML markup, with per-item visibility gated by the viewer's permissions.
//!
//! A menu is an ordered tree of titled nodes. Children stay sorted by
//! `(order, title)` from insertion on, and rendering walks the tree once,
//! dropping anything the viewing user is not allowed to see. Trees are meant
//! to be built at application startup and rendered read-only afterwards.
//!
//! ```
//! use sentiero::{Menu, NewItem, NewSubmenu, RenderOptions};
//!
//! let mut menu = Menu::new("Main");
//! menu.add_item(NewItem {
//!     title: "Home".into(),
//!     url: "/".into(),
//!     ..Default::default()
//! });
//! let admin = menu.create_submenu(NewSubmenu {
//!     title: "Admin".into(),
//!     order: 5,
//!     ..Default::default()
//! });
//! admin.add_item(NewItem {
//!     title: "Users".into(),
//!     url: "/admin/users".into(),
//!     ..Default::default()
//! });
//!
//! let html = menu.render_children(None, &RenderOptions::default());
//! assert_eq!(
//!     html,
//!     r#"<li><a href="/">Home</a></li><li>Admin<ul><li><a href="/admin/users">Users</a></li></ul></li>"#
//! );
//! ```

pub mod definition;
pub mod error;
pub mod menu;
pub mod node;
pub mod options;
pub mod perms;
pub mod resolve;

pub use definition::MenuEntry;
pub use error::MenuError;
pub use menu::{Menu, NewItem, NewSubmenu};
pub use node::{MenuItem, MenuNode};
pub use options::{HIDE_EMPTY_ENV, RenderOptions};
pub use perms::{PermissionCheck, PermissionSet, StaticPermissions};
pub use resolve::{NamedView, UrlResolver, ViewEntry};
