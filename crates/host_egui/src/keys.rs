use core_types::KeyCode;
use egui::{Event, Key};
use input_core::DomEvent;

/// Legacy numeric code for an egui key, for keys the normalizer can act on.
pub fn key_code(key: Key) -> Option<KeyCode> {
    let code = match key {
        Key::Backspace => KeyCode::BACKSPACE,
        Key::Tab => KeyCode::TAB,
        Key::Enter => KeyCode::ENTER,
        Key::Escape => KeyCode::ESCAPE,
        Key::Delete => KeyCode::DELETE,
        Key::Space => KeyCode(32),
        Key::ArrowLeft => KeyCode(37),
        Key::ArrowUp => KeyCode(38),
        Key::ArrowRight => KeyCode(39),
        Key::ArrowDown => KeyCode(40),
        Key::Home => KeyCode(36),
        Key::End => KeyCode(35),
        _ => return letter_or_digit(key),
    };
    Some(code)
}

fn letter_or_digit(key: Key) -> Option<KeyCode> {
    // `Key::name` is "A".."Z" / "0".."9" for these keys.
    let name = key.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphanumeric() => KeyCode::from_char(ch),
        _ => None,
    }
}

/// Key press/release as a native key event.
pub fn key_event(event: &Event) -> Option<DomEvent> {
    let Event::Key { key, pressed, .. } = event else {
        return None;
    };
    let code = key_code(*key)?;
    Some(if *pressed {
        DomEvent::KeyDown(code)
    } else {
        DomEvent::KeyUp(code)
    })
}
