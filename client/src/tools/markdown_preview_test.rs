use super::*;

#[test]
fn renders_basic_markdown() {
    assert_eq!(render_markdown("# Title"), "<h1>Title</h1>\n");
    assert_eq!(render_markdown("some *em* text"), "<p>some <em>em</em> text</p>\n");
}

#[test]
fn renders_tables_and_strikethrough() {
    let out = render_markdown("| a |\n|---|\n| b |\n\n~~gone~~");
    assert!(out.contains("<table>"), "{out}");
    assert!(out.contains("<del>gone</del>"), "{out}");
}

#[test]
fn inline_html_is_escaped() {
    let out = render_markdown("hi <script>alert(1)</script>");
    assert!(!out.contains("<script>"), "{out}");
    assert!(out.contains("&lt;script&gt;"), "{out}");
}

#[test]
fn block_html_is_escaped() {
    let out = render_markdown("<div onclick=\"x()\">boom</div>");
    assert!(!out.contains("<div"), "{out}");
    assert!(out.contains("&lt;div"), "{out}");
}

#[test]
fn empty_source_renders_nothing() {
    assert_eq!(render_markdown(""), "");
}
