use super::*;

#[test]
fn anonymous_visitors_only_see_search() {
    assert_eq!(nav_links(false, false), vec![("Search", "/")]);
}

#[test]
fn signed_in_users_see_member_sections() {
    assert_eq!(
        nav_links(true, false),
        vec![
            ("Search", "/"),
            ("Dashboard", "/dashboard"),
            ("AI Assistant", "/chat"),
            ("Submit Resource", "/submit"),
        ]
    );
}

#[test]
fn admins_get_the_admin_section_last() {
    let links = nav_links(true, true);
    assert_eq!(links.last(), Some(&("Admin", "/admin")));
    assert_eq!(links.len(), 5);
}

#[test]
fn admin_flag_alone_grants_nothing() {
    // A stale admin flag without a live session must not expose the link.
    assert_eq!(nav_links(false, true), vec![("Search", "/")]);
}
