//! Drives an [`InputNormalizer`] over an [`Element`] the way a browser
//! event loop would: user actions produce native events, which are
//! dispatched to the widget until the queue is empty.

use crate::behavior::NativeBehavior;
use crate::element::{Element, Keystroke};
use bus::InputNotification;
use input_core::{DomEvent, EventOutcome, HostElement, InputConfig, InputId, InputNormalizer};
use platform::{PlatformDescriptor, QuirkTable};
use std::sync::mpsc::Sender;

pub type SimulatedInput = InputNormalizer<Element>;

/// Widget over an element that behaves like `desc`'s engine, with quirk
/// compensation resolved for the same platform.
pub fn build(
    id: InputId,
    desc: &PlatformDescriptor,
    config: InputConfig,
    notify: Sender<InputNotification>,
) -> SimulatedInput {
    let element = Element::new(config.control, NativeBehavior::for_platform(desc));
    InputNormalizer::new(id, element, config, QuirkTable::resolve(desc), notify)
}

pub fn mount_and_attach(input: &mut SimulatedInput) {
    input.mount();
    input.host_mut().attach();
    input.attached();
    pump(input);
}

/// Dispatch queued native events. Returns how many were dispatched.
pub fn pump(input: &mut SimulatedInput) -> usize {
    let mut dispatched = 0;
    while let Some(event) = input.host_mut().next_native_event() {
        log::trace!(target: "dom", "dispatch {event:?}");
        input.handle_event(event);
        dispatched += 1;
    }
    dispatched
}

pub fn focus(input: &mut SimulatedInput) {
    input.host_mut().user_focus();
    pump(input);
}

pub fn blur(input: &mut SimulatedInput) {
    input.host_mut().user_blur();
    pump(input);
}

/// One full key press: keydown, the edit, keyup.
///
/// A keydown handler that takes focus away stops the press there, as the
/// rest of the keystroke no longer reaches the field.
pub fn press(input: &mut SimulatedInput, key: Keystroke) {
    if !input.host().has_focus() {
        return;
    }
    let code = key.code();
    input.handle_event(DomEvent::KeyDown(code));
    pump(input);
    if !input.host().has_focus() {
        return;
    }
    input.host_mut().apply_keystroke(key);
    pump(input);
    input.handle_event(DomEvent::KeyUp(code));
    pump(input);
}

pub fn type_text(input: &mut SimulatedInput, text: &str) {
    for ch in text.chars() {
        press(input, Keystroke::Char(ch));
    }
}

pub fn drag(input: &mut SimulatedInput) -> EventOutcome {
    input.handle_event(DomEvent::DragStart)
}

/// Next turn of the event loop: deferred tasks run.
pub fn next_turn(input: &mut SimulatedInput) -> usize {
    let ran = input.run_deferred();
    pump(input);
    ran
}
