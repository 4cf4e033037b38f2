#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Declarative menu definition tests.

use sentiero::{Menu, MenuEntry, MenuError, RenderOptions, StaticPermissions};

#[test]
fn builds_menu_from_json() {
    let json = r#"[
        {"title": "Home", "url": "/"},
        {"title": "Admin", "order": 5, "children": [
            {"title": "Users", "url": "/admin/users"}
        ]}
    ]"#;

    let mut menu = Menu::new("Main");
    menu.extend_from_json(vec![("core".to_string(), json.to_string())]);

    assert_eq!(
        menu.render_children(None, &RenderOptions::default()),
        r#"<li><a href="/">Home</a></li><li>Admin<ul><li><a href="/admin/users">Users</a></li></ul></li>"#
    );
}

#[test]
fn permission_accepts_string_or_array() {
    let json = r#"[
        {"title": "Users", "url": "/admin/users", "permission_required": "admin.users"},
        {"title": "Audit", "url": "/admin/audit", "permission_required": ["admin.users", "audit.view"]}
    ]"#;

    let mut menu = Menu::new("Main");
    menu.extend_from_json(vec![("admin".to_string(), json.to_string())]);

    let viewer = StaticPermissions::new(["admin.users"]);
    assert_eq!(
        menu.render_children(Some(&viewer), &RenderOptions::default()),
        r#"<li><a href="/admin/users">Users</a></li>"#
    );
}

#[test]
fn malformed_source_is_skipped() {
    let good = r#"[{"title": "Home", "url": "/"}]"#;
    let bad = "not json at all";

    let mut menu = Menu::new("Main");
    menu.extend_from_json(vec![
        ("broken".to_string(), bad.to_string()),
        ("core".to_string(), good.to_string()),
    ]);

    assert_eq!(
        menu.render_children(None, &RenderOptions::default()),
        r#"<li><a href="/">Home</a></li>"#
    );
}

#[test]
fn parse_array_reports_the_source() {
    let err = MenuEntry::parse_array("blog", "nonsense").unwrap_err();
    assert!(matches!(
        &err,
        MenuError::InvalidDefinition { source_name, .. } if source_name == "blog"
    ));
    assert!(err.to_string().contains("blog"));
}

#[test]
fn entry_without_url_or_children_is_skipped() {
    let json = r#"[{"title": "Placeholder"}]"#;

    let mut menu = Menu::new("Main");
    menu.extend_from_json(vec![("core".to_string(), json.to_string())]);

    assert!(menu.children().is_empty());
}

#[test]
fn sources_merge_at_sorted_positions() {
    let first = r#"[{"title": "Last", "url": "/last", "order": 10}]"#;
    let second = r#"[{"title": "First", "url": "/first", "order": 0}]"#;

    let mut menu = Menu::new("Main");
    menu.extend_from_json(vec![
        ("a".to_string(), first.to_string()),
        ("b".to_string(), second.to_string()),
    ]);

    assert_eq!(
        menu.render_children(None, &RenderOptions::default()),
        r#"<li><a href="/first">First</a></li><li><a href="/last">Last</a></li>"#
    );
}

#[test]
fn nested_entries_carry_urls_and_permissions() {
    let json = r#"[
        {"title": "Admin", "url": "/admin", "permission_required": "admin.access", "children": [
            {"title": "Users", "url": "/admin/users"}
        ]}
    ]"#;

    let mut menu = Menu::new("Main");
    menu.extend_from_json(vec![("admin".to_string(), json.to_string())]);

    // The submenu's own permission gates it from its parent's filter.
    let viewer = StaticPermissions::default();
    assert_eq!(
        menu.render_children(Some(&viewer), &RenderOptions::default()),
        ""
    );

    let admin = StaticPermissions::new(["admin.access"]);
    assert_eq!(
        menu.render_children(Some(&admin), &RenderOptions::default()),
        r#"<li><a href="/admin">Admin</a><ul><li><a href="/admin/users">Users</a></li></ul></li>"#
    );
}
