use super::*;

fn descriptor(featured: bool, is_new: bool) -> ToolDescriptor {
    ToolDescriptor {
        id: "sample",
        name: "Sample",
        description: "",
        category: "text",
        icon: "type",
        featured,
        is_new,
    }
}

#[test]
fn ready_plain_tool_has_no_badges() {
    assert!(badges(&descriptor(false, false), true).is_empty());
}

#[test]
fn badges_follow_display_order() {
    assert_eq!(badges(&descriptor(true, true), false), ["Featured", "New", "Coming soon"]);
}

#[test]
fn pending_tool_is_marked() {
    assert_eq!(badges(&descriptor(false, true), false), ["New", "Coming soon"]);
}
