use std::cell::RefCell;
use std::rc::Rc;

use filter_chart::api::{SelectionController, ToggleOutcome};
use filter_chart::core::{Item, sample_dataset};

fn ids(items: &[Item]) -> Vec<String> {
    items.iter().map(|item| item.id().to_owned()).collect()
}

fn recording_controller() -> (SelectionController, Rc<RefCell<Vec<Vec<String>>>>) {
    let mut controller = SelectionController::new(sample_dataset().expect("sample dataset"));
    let calls = Rc::new(RefCell::new(Vec::<Vec<String>>::new()));
    let sink = calls.clone();
    controller.on_change(move |visible| sink.borrow_mut().push(ids(visible)));
    (controller, calls)
}

#[test]
fn initial_visible_items_are_full_dataset_in_order() {
    let controller = SelectionController::new(sample_dataset().expect("sample dataset"));
    assert_eq!(
        ids(&controller.visible_items()),
        vec!["d1", "d2", "d3", "d4"]
    );
    assert!(controller.excluded_ids().is_empty());
}

#[test]
fn toggle_hides_item_and_notifies_once() {
    let (mut controller, calls) = recording_controller();

    assert_eq!(controller.toggle("d2"), ToggleOutcome::Excluded);
    assert_eq!(ids(&controller.visible_items()), vec!["d1", "d3", "d4"]);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec!["d1", "d3", "d4"]);
}

#[test]
fn second_toggle_restores_original_order() {
    let (mut controller, calls) = recording_controller();

    controller.toggle("d2");
    assert_eq!(controller.toggle("d2"), ToggleOutcome::Included);
    assert_eq!(
        ids(&controller.visible_items()),
        vec!["d1", "d2", "d3", "d4"]
    );
    assert_eq!(calls.borrow().len(), 2);
    assert_eq!(calls.borrow()[1], vec!["d1", "d2", "d3", "d4"]);
}

#[test]
fn unknown_id_is_ignored_but_still_notifies() {
    let (mut controller, calls) = recording_controller();

    assert_eq!(controller.toggle("nonexistent"), ToggleOutcome::UnknownId);
    assert_eq!(
        ids(&controller.visible_items()),
        vec!["d1", "d2", "d3", "d4"]
    );
    assert!(!controller.is_excluded("nonexistent"));

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec!["d1", "d2", "d3", "d4"]);
}

#[test]
fn hiding_every_item_yields_empty_subset() {
    let (mut controller, calls) = recording_controller();
    for id in ["d4", "d3", "d2", "d1"] {
        controller.toggle(id);
    }

    assert!(controller.visible_items().is_empty());
    assert_eq!(controller.excluded_len(), 4);
    assert_eq!(calls.borrow().last().map(Vec::len), Some(0));
}

#[test]
fn registering_a_new_listener_replaces_the_previous_one() {
    let (mut controller, first_calls) = recording_controller();
    let second_calls = Rc::new(RefCell::new(0usize));
    let counter = second_calls.clone();
    controller.on_change(move |_| *counter.borrow_mut() += 1);

    controller.toggle("d1");

    assert!(first_calls.borrow().is_empty());
    assert_eq!(*second_calls.borrow(), 1);
}

#[test]
fn toggle_without_listener_still_updates_selection() {
    let mut controller = SelectionController::new(sample_dataset().expect("sample dataset"));
    controller.toggle("d3");
    assert!(controller.is_excluded("d3"));
    assert_eq!(controller.excluded_ids(), vec!["d3"]);
}

#[test]
fn snapshot_lists_visible_and_excluded_ids() {
    let mut controller = SelectionController::new(sample_dataset().expect("sample dataset"));
    controller.toggle("d4");
    controller.toggle("d2");

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.visible_ids, vec!["d1", "d3"]);
    assert_eq!(snapshot.excluded_ids, vec!["d2", "d4"]);
}
