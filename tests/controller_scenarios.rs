use std::cell::RefCell;
use std::rc::Rc;

use pincell::pin::{active_index_signed, PinCallbacks};
use pincell::{CompletionMode, FocusTarget, PinController, PinLength};

#[derive(Default)]
struct Calls {
    changes: Vec<String>,
    completions: Vec<String>,
}

fn recorded(length: usize, auto_focus: bool) -> (PinController, Rc<RefCell<Calls>>) {
    let calls = Rc::new(RefCell::new(Calls::default()));
    let on_change = Rc::clone(&calls);
    let on_complete = Rc::clone(&calls);

    let controller = PinController::new(PinLength::new(length).expect("valid length"), auto_focus)
        .with_callbacks(PinCallbacks {
            on_pin_change: Some(Box::new(move |pin: &str| {
                on_change.borrow_mut().changes.push(pin.to_string())
            })),
            on_pin_complete: Some(Box::new(move |pin: &str| {
                on_complete.borrow_mut().completions.push(pin.to_string())
            })),
        });
    (controller, calls)
}

#[derive(Default)]
struct SurfaceProbe {
    focus_requests: usize,
}

impl FocusTarget for SurfaceProbe {
    fn request_focus(&mut self) {
        self.focus_requests += 1;
    }

    fn request_blur(&mut self) {}
}

#[test]
fn partial_then_full_entry() {
    let (mut pin, calls) = recorded(4, false);

    pin.handle_change_text("123");
    assert_eq!(pin.pin(), "123");
    assert_eq!(active_index_signed(pin.active_index()), 3);
    assert_eq!(calls.borrow().changes, vec!["123"]);
    assert!(calls.borrow().completions.is_empty());

    pin.handle_change_text("1234");
    assert_eq!(pin.pin(), "1234");
    assert_eq!(active_index_signed(pin.active_index()), 3);
    assert_eq!(calls.borrow().changes, vec!["123", "1234"]);
    assert_eq!(calls.borrow().completions, vec!["1234"]);
}

#[test]
fn pasted_overflow_is_truncated() {
    let (mut pin, calls) = recorded(4, false);

    pin.handle_change_text("123456");
    assert_eq!(pin.pin(), "1234");
    assert_eq!(calls.borrow().changes, vec!["1234"]);
    assert_eq!(calls.borrow().completions, vec!["1234"]);
}

#[test]
fn focus_and_blur_on_empty_pin() {
    let (mut pin, _calls) = recorded(6, false);

    pin.handle_focus();
    assert_eq!(active_index_signed(pin.active_index()), 0);

    pin.handle_blur();
    assert_eq!(active_index_signed(pin.active_index()), -1);
}

#[test]
fn press_requests_focus_once_per_call() {
    let (mut pin, calls) = recorded(4, false);
    pin.handle_change_text("42");
    let mut surface = SurfaceProbe::default();

    for expected in 1..=3 {
        pin.handle_press(&mut surface);
        assert_eq!(surface.focus_requests, expected);
    }
    assert_eq!(pin.pin(), "42");
    assert_eq!(calls.borrow().changes.len(), 1);
}

#[test]
fn replayed_full_value_is_idempotent() {
    let (mut pin, calls) = recorded(4, true);
    pin.handle_change_text("1234");
    let active = pin.active_index();

    pin.handle_change_text("1234");
    assert_eq!(pin.pin(), "1234");
    assert_eq!(pin.active_index(), active);
    assert_eq!(calls.borrow().changes.len(), 2);
    assert_eq!(calls.borrow().completions.len(), 1);
}

#[test]
fn level_mode_reports_every_full_observation() {
    let (pin, calls) = recorded(4, true);
    let mut pin = pin.with_completion(CompletionMode::Level);

    pin.handle_change_text("1234");
    pin.handle_change_text("1234");
    assert_eq!(calls.borrow().completions, vec!["1234", "1234"]);
}
