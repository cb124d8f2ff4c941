use super::*;
use crate::memory::MemoryHost;

fn markers() -> MemoryHost {
    MemoryHost::new().with_element(Node::CursorDot).with_element(Node::CursorOutline)
}

fn bound(host: &MemoryHost) -> CustomCursor {
    let mut cursor = CustomCursor::default();
    cursor.initialize(host);
    cursor
}

#[test]
fn scale_transform_formats_factor() {
    assert_eq!(scale_transform(1.5), "translate(-50%, -50%) scale(1.5)");
    assert_eq!(scale_transform(1.0), "translate(-50%, -50%) scale(1)");
}

#[test]
fn pointer_move_positions_both_markers() {
    let mut host = markers();
    let cursor = bound(&host);
    cursor.on_pointer_move(&mut host, 120.0, 45.5);
    for node in [Node::CursorDot, Node::CursorOutline] {
        assert_eq!(host.style(&node, "left"), Some("120px"));
        assert_eq!(host.style(&node, "top"), Some("45.5px"));
    }
}

#[test]
fn pointer_move_has_no_smoothing() {
    let mut host = markers();
    let cursor = bound(&host);
    cursor.on_pointer_move(&mut host, 0.0, 0.0);
    cursor.on_pointer_move(&mut host, 800.0, 600.0);
    assert_eq!(host.style(&Node::CursorOutline, "left"), Some("800px"));
    assert_eq!(host.style(&Node::CursorOutline, "top"), Some("600px"));
}

#[test]
fn hover_enter_scales_markers() {
    let mut host = markers();
    let cursor = bound(&host);
    cursor.on_hover(&mut host, true);
    assert_eq!(host.style(&Node::CursorOutline, "transform"), Some("translate(-50%, -50%) scale(1.5)"));
    assert_eq!(host.style(&Node::CursorDot, "transform"), Some("translate(-50%, -50%) scale(0.7)"));
}

#[test]
fn hover_exit_restores_scale_and_keeps_border() {
    let mut host = markers();
    let cursor = bound(&host);
    cursor.on_hover(&mut host, true);
    cursor.on_hover(&mut host, false);
    assert_eq!(host.style(&Node::CursorOutline, "transform"), Some("translate(-50%, -50%) scale(1)"));
    assert_eq!(host.style(&Node::CursorDot, "transform"), Some("translate(-50%, -50%) scale(1)"));
    assert_eq!(host.style(&Node::CursorOutline, "border-color"), Some(CURSOR_BORDER_COLOR));
}

#[test]
fn one_missing_marker_disables_everything() {
    let mut host = MemoryHost::new().with_element(Node::CursorDot);
    let cursor = bound(&host);
    assert!(!cursor.is_bound());
    cursor.on_pointer_move(&mut host, 10.0, 10.0);
    cursor.on_hover(&mut host, true);
    assert_eq!(host.style(&Node::CursorDot, "left"), None);
    assert_eq!(host.style(&Node::CursorDot, "transform"), None);
}
