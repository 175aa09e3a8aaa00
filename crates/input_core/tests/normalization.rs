//! End-to-end checks of the notification contract over simulated engines.

use bus::{InputNotification, NotificationBus};
use core_types::ControlKind;
use dom::Keystroke;
use dom::simulate::{self, SimulatedInput};
use input_core::{HostElement, InputConfig, InputId, SelectionRange};
use platform::PlatformDescriptor;

fn start(desc: PlatformDescriptor, config: InputConfig) -> (SimulatedInput, NotificationBus) {
    let bus = NotificationBus::new();
    let mut input = simulate::build(InputId::from_raw(9), &desc, config, bus.sender());
    simulate::mount_and_attach(&mut input);
    let _ = bus.drain().count();
    (input, bus)
}

fn live_values(bus: &NotificationBus) -> Vec<String> {
    bus.drain()
        .filter_map(|n| match n {
            InputNotification::LiveChange { value, .. } => Some(value),
            _ => None,
        })
        .collect()
}

#[test]
fn ie9_backspace_in_populated_field_reports_post_deletion_value() {
    let config = InputConfig {
        value: "hello".into(),
        ..InputConfig::default()
    };
    let (mut input, bus) = start(PlatformDescriptor::ie(9), config);
    simulate::focus(&mut input);
    simulate::press(&mut input, Keystroke::Backspace);

    assert_eq!(live_values(&bus), vec!["hell".to_string()]);
    assert_eq!(input.value(), "hell");
}

#[test]
fn ie9_letter_produces_single_live_change() {
    let (mut input, bus) = start(PlatformDescriptor::ie(9), InputConfig::default());
    simulate::focus(&mut input);
    simulate::press(&mut input, Keystroke::Char('q'));
    assert_eq!(live_values(&bus), vec!["q".to_string()]);
}

#[test]
fn delete_key_on_ie9_is_compensated() {
    let config = InputConfig {
        value: "ab".into(),
        select_on_focus: true,
        ..InputConfig::default()
    };
    let (mut input, bus) = start(PlatformDescriptor::ie(9), config);
    simulate::focus(&mut input);
    simulate::next_turn(&mut input);
    simulate::press(&mut input, Keystroke::Delete);
    assert_eq!(live_values(&bus), vec![String::new()]);
    assert_eq!(input.value(), "");
}

#[test]
fn windows_phone_8_enter_blurs_single_line_only() {
    let (mut single, single_bus) = start(PlatformDescriptor::windows_phone(8), InputConfig::default());
    simulate::focus(&mut single);
    simulate::type_text(&mut single, "ok");
    simulate::press(&mut single, Keystroke::Enter);
    assert!(!single.host().has_focus());
    assert!(single_bus.drain().any(|n| matches!(
        n,
        InputNotification::CommitChange { ref value, .. } if value == "ok"
    )));

    let multi = InputConfig {
        control: ControlKind::MultiLine,
        ..InputConfig::default()
    };
    let (mut area, _bus) = start(PlatformDescriptor::windows_phone(8), multi);
    simulate::focus(&mut area);
    simulate::press(&mut area, Keystroke::Enter);
    assert!(area.host().has_focus());
    assert_eq!(area.value(), "\n");
}

#[test]
fn select_on_focus_selects_whole_text_after_turn() {
    let config = InputConfig {
        value: "héllo".into(),
        select_on_focus: true,
        ..InputConfig::default()
    };
    let (mut input, _bus) = start(PlatformDescriptor::UNKNOWN, config);
    simulate::focus(&mut input);
    assert!(input.pending_select());
    assert_eq!(input.host().selection(), None);

    simulate::next_turn(&mut input);
    assert!(!input.pending_select());
    assert_eq!(input.host().selection(), Some(SelectionRange::new(0, 6)));
}

#[test]
fn disabling_raises_one_notification_and_sets_attribute() {
    let (mut input, bus) = start(PlatformDescriptor::UNKNOWN, InputConfig::default());
    input.set_disabled(true);
    assert_eq!(input.host().attr("disabled"), Some("disabled"));
    assert_eq!(
        bus.drain().collect::<Vec<_>>(),
        vec![InputNotification::DisabledChanged {
            widget: 9,
            disabled: true
        }]
    );
}

#[test]
fn disabled_field_ignores_typing() {
    let (mut input, bus) = start(PlatformDescriptor::ie(8), InputConfig::default());
    simulate::focus(&mut input);
    input.set_disabled(true);
    simulate::pump(&mut input);
    let _ = bus.drain().count();
    simulate::type_text(&mut input, "abc");
    assert_eq!(bus.drain().count(), 0);
    assert_eq!(input.value(), "");
}

#[test]
fn set_value_round_trips_for_any_string() {
    let (mut input, bus) = start(PlatformDescriptor::ie(9), InputConfig::default());
    for v in ["", "a", "with spaces", "ünïcödé", "", "\u{1F600}"] {
        input.set_value(v);
        assert_eq!(input.value(), v);
        assert_eq!(input.host().live_value(), Some(v));
    }
    assert_eq!(bus.drain().count(), 0);
}

#[test]
fn programmatic_set_does_not_rewrite_unchanged_value() {
    let config = InputConfig {
        value: "v".into(),
        ..InputConfig::default()
    };
    let (mut input, _bus) = start(PlatformDescriptor::UNKNOWN, config);
    input.host_mut().take_mutations();
    assert!(!input.set_value("v"));
    assert!(input.host().mutations().is_empty());
}

#[test]
fn ie8_programmatic_set_between_keydown_and_keyup_wins() {
    let config = InputConfig {
        value: "abc".into(),
        ..InputConfig::default()
    };
    let (mut input, bus) = start(PlatformDescriptor::ie(8), config);
    simulate::focus(&mut input);
    // Edit lands in the element; IE8 only reports it on keyup.
    input.host_mut().apply_keystroke(Keystroke::Char('d'));
    simulate::pump(&mut input);
    assert_eq!(input.host().live_value(), Some("abcd"));
    assert_eq!(input.value(), "abc");

    assert!(!input.set_value("abc"));
    assert_eq!(input.host().live_value(), Some(input.value()));

    input.handle_event(input_core::DomEvent::KeyUp(Keystroke::Char('d').code()));
    assert_eq!(live_values(&bus), vec!["abc".to_string()]);
    assert_eq!(input.host().live_value(), Some("abc"));
}
