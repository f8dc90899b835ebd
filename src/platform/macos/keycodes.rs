//! macOS virtual keycode to Key mappings.

use crate::keycode::Key;

/// Convert a macOS virtual keycode (kVK) to our Key enum.
pub fn keycode_to_key(code: u16) -> Key {
    match code {
        // Letters
        0 => Key::KeyA,
        11 => Key::KeyB,
        8 => Key::KeyC,
        2 => Key::KeyD,
        14 => Key::KeyE,
        3 => Key::KeyF,
        5 => Key::KeyG,
        4 => Key::KeyH,
        34 => Key::KeyI,
        38 => Key::KeyJ,
        40 => Key::KeyK,
        37 => Key::KeyL,
        46 => Key::KeyM,
        45 => Key::KeyN,
        31 => Key::KeyO,
        35 => Key::KeyP,
        12 => Key::KeyQ,
        15 => Key::KeyR,
        1 => Key::KeyS,
        17 => Key::KeyT,
        32 => Key::KeyU,
        9 => Key::KeyV,
        13 => Key::KeyW,
        7 => Key::KeyX,
        16 => Key::KeyY,
        6 => Key::KeyZ,

        // Numbers (top row)
        29 => Key::Num0,
        18 => Key::Num1,
        19 => Key::Num2,
        20 => Key::Num3,
        21 => Key::Num4,
        23 => Key::Num5,
        22 => Key::Num6,
        26 => Key::Num7,
        28 => Key::Num8,
        25 => Key::Num9,

        // Function keys
        122 => Key::F1,
        120 => Key::F2,
        99 => Key::F3,
        118 => Key::F4,
        96 => Key::F5,
        97 => Key::F6,
        98 => Key::F7,
        100 => Key::F8,
        101 => Key::F9,
        109 => Key::F10,
        103 => Key::F11,
        111 => Key::F12,

        // Modifiers
        56 => Key::ShiftLeft,
        60 => Key::ShiftRight,
        59 => Key::ControlLeft,
        62 => Key::ControlRight,
        58 => Key::AltLeft,
        61 => Key::AltRight,
        55 => Key::MetaLeft,
        54 => Key::MetaRight,

        // Navigation
        53 => Key::Escape,
        48 => Key::Tab,
        49 => Key::Space,
        36 => Key::Enter,
        51 => Key::Backspace,
        114 => Key::Insert, // "help" on older keyboards
        117 => Key::Delete,
        115 => Key::Home,
        119 => Key::End,
        116 => Key::PageUp,
        121 => Key::PageDown,
        126 => Key::ArrowUp,
        125 => Key::ArrowDown,
        123 => Key::ArrowLeft,
        124 => Key::ArrowRight,

        other => Key::Unknown(other as u32),
    }
}
