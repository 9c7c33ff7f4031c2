//! Physical keyboard mapping

use calc_spec::{Base, Input, Mode, Operator};

/// Map a key name to an input.
///
/// Key names follow the browser `KeyboardEvent.key` convention (`"Enter"`,
/// `"Backspace"`, `"a"`). Hex letters only map in Programmer mode with the
/// HEX base; everything else unknown maps to `None`.
pub fn map_key(key: &str, mode: Mode, base: Base) -> Option<Input> {
    match key {
        "Enter" | "=" => return Some(Input::Equals),
        "Backspace" | "Delete" => return Some(Input::Delete),
        "Escape" | "Esc" => return Some(Input::Clear),
        _ => {}
    }

    let mut chars = key.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };

    match c {
        '0'..='9' => Some(Input::Digit(c)),
        '.' | ',' if mode == Mode::Standard => Some(Input::Digit('.')),
        '+' => Some(Input::Operator(Operator::Add)),
        '-' => Some(Input::Operator(Operator::Sub)),
        '*' => Some(Input::Operator(Operator::Mul)),
        '/' => Some(Input::Operator(Operator::Div)),
        'a'..='f' | 'A'..='F' if mode == Mode::Programmer && base == Base::Hex => {
            Some(Input::Digit(c.to_ascii_uppercase()))
        }
        _ => None,
    }
}
