use std::cell::Cell;
use std::rc::Rc;

use pincell::pin::{PinCallbacks, PinController};
use pincell::{CompletionMode, PinLength};
use proptest::prelude::*;

struct Counters {
    changes: Rc<Cell<usize>>,
    completions: Rc<Cell<usize>>,
    last_change: Rc<std::cell::RefCell<String>>,
}

fn counted(length: usize, completion: CompletionMode) -> (PinController, Counters) {
    let changes = Rc::new(Cell::new(0));
    let completions = Rc::new(Cell::new(0));
    let last_change = Rc::new(std::cell::RefCell::new(String::new()));

    let (c, k, l) = (
        Rc::clone(&changes),
        Rc::clone(&completions),
        Rc::clone(&last_change),
    );
    let controller = PinController::new(PinLength::new(length).unwrap(), false)
        .with_completion(completion)
        .with_callbacks(PinCallbacks {
            on_pin_change: Some(Box::new(move |pin: &str| {
                c.set(c.get() + 1);
                *l.borrow_mut() = pin.to_string();
            })),
            on_pin_complete: Some(Box::new(move |_: &str| k.set(k.get() + 1))),
        });
    (
        controller,
        Counters {
            changes,
            completions,
            last_change,
        },
    )
}

fn prefix(raw: &str, length: usize) -> String {
    raw.chars().take(length).collect()
}

proptest! {
    #[test]
    fn pin_is_truncated_prefix(raw in "\\PC{0,12}", length in 1usize..8) {
        let (mut pin, counters) = counted(length, CompletionMode::Edge);
        pin.handle_change_text(&raw);

        let expected = prefix(&raw, length);
        prop_assert_eq!(pin.pin(), expected.as_str());
        prop_assert_eq!(counters.changes.get(), 1);
        let last_change = counters.last_change.borrow();
        prop_assert_eq!(last_change.as_str(), expected.as_str());
    }

    #[test]
    fn completion_fires_exactly_when_full(raw in "[0-9]{0,10}", length in 1usize..8) {
        for mode in [CompletionMode::Edge, CompletionMode::Level] {
            let (mut pin, counters) = counted(length, mode);
            pin.handle_change_text(&raw);

            let full = raw.chars().count() >= length;
            prop_assert_eq!(counters.completions.get(), usize::from(full));
        }
    }

    #[test]
    fn active_index_follows_length(
        edits in proptest::collection::vec("[0-9]{0,9}", 1..12),
        length in 1usize..8,
    ) {
        let (mut pin, counters) = counted(length, CompletionMode::Edge);
        for (step, raw) in edits.iter().enumerate() {
            pin.handle_change_text(raw);
            let filled = pin.pin().chars().count();
            prop_assert!(filled <= length);
            prop_assert_eq!(pin.active_index(), Some(filled.min(length - 1)));
            prop_assert_eq!(counters.changes.get(), step + 1);
        }

        pin.handle_blur();
        prop_assert_eq!(pin.active_index(), None);
        pin.handle_focus();
        prop_assert_eq!(
            pin.active_index(),
            Some(pin.pin().chars().count().min(length - 1))
        );
    }

    #[test]
    fn edge_mode_never_fires_twice_for_the_same_value(raw in "[0-9]{4,10}") {
        let (mut pin, counters) = counted(4, CompletionMode::Edge);
        pin.handle_change_text(&raw);
        pin.handle_change_text(&raw);
        pin.handle_change_text(pin.pin().to_string().as_str());
        prop_assert_eq!(counters.completions.get(), 1);
    }

    #[test]
    fn edge_mode_fires_once_per_transition_into_full(
        edits in proptest::collection::vec("[0-9]{0,6}", 1..16),
    ) {
        let (mut pin, counters) = counted(4, CompletionMode::Edge);
        let mut transitions = 0;
        for raw in &edits {
            let was_full = pin.is_complete();
            pin.handle_change_text(raw);
            if !was_full && pin.is_complete() {
                transitions += 1;
            }
        }
        prop_assert_eq!(counters.completions.get(), transitions);
    }
}
