use std::cell::RefCell;

use super::*;

fn sample_dispatcher() -> Dispatcher<char> {
    Dispatcher::new(Registry::build([("uuid-generator", 'A'), ("hash-generator", 'B')]))
}

#[test]
fn known_id_resolves_without_notice() {
    let mut dispatcher = sample_dispatcher();
    let events = RefCell::new(Vec::new());
    let sink = |event: DispatchEvent| events.borrow_mut().push(event);

    assert_eq!(dispatcher.dispatch("uuid-generator", &sink), Resolution::Known('A'));
    assert_eq!(dispatcher.dispatch("hash-generator", &sink), Resolution::Known('B'));
    assert!(events.borrow().is_empty());
    assert!(!dispatcher.was_announced("uuid-generator"));
}

#[test]
fn unknown_id_emits_one_notice() {
    let mut dispatcher = sample_dispatcher();
    let events = RefCell::new(Vec::new());
    let sink = |event: DispatchEvent| events.borrow_mut().push(event);

    assert_eq!(dispatcher.dispatch("qr-generator", &sink), Resolution::Unknown);
    assert_eq!(
        *events.borrow(),
        [DispatchEvent::Unresolved { id: "qr-generator".to_owned() }]
    );
    assert!(dispatcher.was_announced("qr-generator"));
}

#[test]
fn repeated_unknown_id_is_not_reannounced() {
    let mut dispatcher = sample_dispatcher();
    let events = RefCell::new(Vec::new());
    let sink = |event: DispatchEvent| events.borrow_mut().push(event);

    for _ in 0..3 {
        assert_eq!(dispatcher.dispatch("qr-generator", &sink), Resolution::Unknown);
    }
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn each_distinct_unknown_id_is_announced_once() {
    let mut dispatcher = sample_dispatcher();
    let events = RefCell::new(Vec::new());
    let sink = |event: DispatchEvent| events.borrow_mut().push(event);

    dispatcher.dispatch("qr-generator", &sink);
    dispatcher.dispatch("uuid-generator", &sink);
    dispatcher.dispatch("image-resizer", &sink);
    dispatcher.dispatch("qr-generator", &sink);

    assert_eq!(
        *events.borrow(),
        [
            DispatchEvent::Unresolved { id: "qr-generator".to_owned() },
            DispatchEvent::Unresolved { id: "image-resizer".to_owned() },
        ]
    );
}

#[test]
fn empty_id_is_ordinary_unresolved_input() {
    let mut dispatcher = sample_dispatcher();
    let events = RefCell::new(Vec::new());
    let sink = |event: DispatchEvent| events.borrow_mut().push(event);

    assert_eq!(dispatcher.dispatch("", &sink), Resolution::Unknown);
    assert_eq!(dispatcher.dispatch("", &sink), Resolution::Unknown);
    assert_eq!(*events.borrow(), [DispatchEvent::Unresolved { id: String::new() }]);
}

#[test]
fn resolve_is_pure() {
    let dispatcher = sample_dispatcher();
    assert_eq!(dispatcher.resolve("qr-generator"), Resolution::Unknown);
    assert_eq!(dispatcher.resolve("uuid-generator"), Resolution::Known('A'));
    assert!(!dispatcher.was_announced("qr-generator"));
}

#[test]
fn separate_dispatchers_track_sessions_independently() {
    let mut first = sample_dispatcher();
    let mut second = Dispatcher::new(first.registry().clone());
    let count = RefCell::new(0);
    let sink = |_: DispatchEvent| *count.borrow_mut() += 1;

    first.dispatch("qr-generator", &sink);
    second.dispatch("qr-generator", &sink);
    assert_eq!(*count.borrow(), 2);
}
