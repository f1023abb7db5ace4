use super::*;

use crate::state::notices::ToastKind;

fn toast(seq: u64) -> Toast {
    Toast { seq, kind: ToastKind::Info, title: String::new(), message: String::new() }
}

#[test]
fn nothing_scheduled_yet_returns_all() {
    assert_eq!(unscheduled(&[toast(1), toast(2)], 0), [1, 2]);
}

#[test]
fn skips_already_scheduled_toasts() {
    assert_eq!(unscheduled(&[toast(3), toast(4), toast(5)], 4), [5]);
    assert!(unscheduled(&[toast(3)], 3).is_empty());
}
