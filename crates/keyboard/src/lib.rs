//! Pick key handling.
//!
//! Turns terminal key events into the single-character pick keys groups are
//! configured with. Keys typed on a Cyrillic layout are translated to the
//! Latin key on the same physical position, so picking works regardless of
//! the active keyboard layout.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// ЙЦУКЕН rows, lowercase then uppercase.
const CYRILLIC: &str = "йцукенгшщзхъфывапролджэячсмитьбюЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮ";
/// QWERTY keys on the same physical positions.
const LATIN: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.QWERTYUIOP{}ASDFGHJKL:\"ZXCVBNM<>";

/// Translate a Cyrillic character to the Latin character on the same key.
///
/// Other characters are returned unchanged.
pub fn cyrillic_to_latin(ch: char) -> char {
    CYRILLIC
        .chars()
        .zip(LATIN.chars())
        .find(|(cyr, _)| *cyr == ch)
        .map(|(_, lat)| lat)
        .unwrap_or(ch)
}

/// Extract the pick key from a key event.
///
/// Only presses of a character key without Ctrl or Alt count; Shift is
/// allowed so uppercase pick keys work.
pub fn pick_key(key: &KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(cyrillic_to_latin(ch).to_string()),
        _ => None,
    }
}
