//! X11 keycode to Key mappings.

use crate::keycode::Key;

/// Convert an X11 keycode to our Key enum.
pub fn keycode_to_key(code: u32) -> Key {
    match code {
        // Letters (QWERTY layout)
        38 => Key::KeyA,
        56 => Key::KeyB,
        54 => Key::KeyC,
        40 => Key::KeyD,
        26 => Key::KeyE,
        41 => Key::KeyF,
        42 => Key::KeyG,
        43 => Key::KeyH,
        31 => Key::KeyI,
        44 => Key::KeyJ,
        45 => Key::KeyK,
        46 => Key::KeyL,
        58 => Key::KeyM,
        57 => Key::KeyN,
        32 => Key::KeyO,
        33 => Key::KeyP,
        24 => Key::KeyQ,
        27 => Key::KeyR,
        39 => Key::KeyS,
        28 => Key::KeyT,
        30 => Key::KeyU,
        55 => Key::KeyV,
        25 => Key::KeyW,
        53 => Key::KeyX,
        29 => Key::KeyY,
        52 => Key::KeyZ,

        // Numbers (top row)
        19 => Key::Num0,
        10 => Key::Num1,
        11 => Key::Num2,
        12 => Key::Num3,
        13 => Key::Num4,
        14 => Key::Num5,
        15 => Key::Num6,
        16 => Key::Num7,
        17 => Key::Num8,
        18 => Key::Num9,

        // Function keys
        67 => Key::F1,
        68 => Key::F2,
        69 => Key::F3,
        70 => Key::F4,
        71 => Key::F5,
        72 => Key::F6,
        73 => Key::F7,
        74 => Key::F8,
        75 => Key::F9,
        76 => Key::F10,
        95 => Key::F11,
        96 => Key::F12,

        // Modifiers
        50 => Key::ShiftLeft,
        62 => Key::ShiftRight,
        37 => Key::ControlLeft,
        105 => Key::ControlRight,
        64 => Key::AltLeft,
        108 => Key::AltRight,
        133 => Key::MetaLeft,
        134 => Key::MetaRight,

        // Navigation
        9 => Key::Escape,
        23 => Key::Tab,
        65 => Key::Space,
        36 => Key::Enter,
        22 => Key::Backspace,
        118 => Key::Insert,
        119 => Key::Delete,
        110 => Key::Home,
        115 => Key::End,
        112 => Key::PageUp,
        117 => Key::PageDown,
        111 => Key::ArrowUp,
        116 => Key::ArrowDown,
        113 => Key::ArrowLeft,
        114 => Key::ArrowRight,

        other => Key::Unknown(other),
    }
}
