// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the
/// page load. Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #0E7C66;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the #vault-helper element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("vault-helper"))
    {
        node.set_text_content(Some(msg));
    }
}
