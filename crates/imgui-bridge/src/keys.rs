//! Translation tables between host identifiers and library identifiers.

use imgui_bridge_core::{Key, MouseButton, MouseCursor};

use crate::host::{HostCursor, HostKey, PointerButton};

/// Maps a host key to the library key. Keys without a counterpart map to [`Key::None`].
pub fn convert_key(key: HostKey) -> Key {
    match key {
        HostKey::Unknown => Key::None,
        HostKey::Tab => Key::Tab,
        HostKey::Left => Key::LeftArrow,
        HostKey::Right => Key::RightArrow,
        HostKey::Up => Key::UpArrow,
        HostKey::Down => Key::DownArrow,
        HostKey::PageUp => Key::PageUp,
        HostKey::PageDown => Key::PageDown,
        HostKey::Home => Key::Home,
        HostKey::End => Key::End,
        HostKey::Insert => Key::Insert,
        HostKey::Delete => Key::Delete,
        HostKey::BackSpace => Key::Backspace,
        HostKey::SpaceBar => Key::Space,
        HostKey::Enter => Key::Enter,
        HostKey::Escape => Key::Escape,
        HostKey::LeftControl => Key::LeftCtrl,
        HostKey::LeftShift => Key::LeftShift,
        HostKey::LeftAlt => Key::LeftAlt,
        HostKey::LeftCommand => Key::LeftSuper,
        HostKey::RightControl => Key::RightCtrl,
        HostKey::RightShift => Key::RightShift,
        HostKey::RightAlt => Key::RightAlt,
        HostKey::RightCommand => Key::RightSuper,
        HostKey::Menu => Key::Menu,
        HostKey::Zero => Key::Num0,
        HostKey::One => Key::Num1,
        HostKey::Two => Key::Num2,
        HostKey::Three => Key::Num3,
        HostKey::Four => Key::Num4,
        HostKey::Five => Key::Num5,
        HostKey::Six => Key::Num6,
        HostKey::Seven => Key::Num7,
        HostKey::Eight => Key::Num8,
        HostKey::Nine => Key::Num9,
        HostKey::A => Key::A,
        HostKey::B => Key::B,
        HostKey::C => Key::C,
        HostKey::D => Key::D,
        HostKey::E => Key::E,
        HostKey::F => Key::F,
        HostKey::G => Key::G,
        HostKey::H => Key::H,
        HostKey::I => Key::I,
        HostKey::J => Key::J,
        HostKey::K => Key::K,
        HostKey::L => Key::L,
        HostKey::M => Key::M,
        HostKey::N => Key::N,
        HostKey::O => Key::O,
        HostKey::P => Key::P,
        HostKey::Q => Key::Q,
        HostKey::R => Key::R,
        HostKey::S => Key::S,
        HostKey::T => Key::T,
        HostKey::U => Key::U,
        HostKey::V => Key::V,
        HostKey::W => Key::W,
        HostKey::X => Key::X,
        HostKey::Y => Key::Y,
        HostKey::Z => Key::Z,
        HostKey::F1 => Key::F1,
        HostKey::F2 => Key::F2,
        HostKey::F3 => Key::F3,
        HostKey::F4 => Key::F4,
        HostKey::F5 => Key::F5,
        HostKey::F6 => Key::F6,
        HostKey::F7 => Key::F7,
        HostKey::F8 => Key::F8,
        HostKey::F9 => Key::F9,
        HostKey::F10 => Key::F10,
        HostKey::F11 => Key::F11,
        HostKey::F12 => Key::F12,
        HostKey::Apostrophe => Key::Apostrophe,
        HostKey::Comma => Key::Comma,
        HostKey::Hyphen => Key::Minus,
        HostKey::Period => Key::Period,
        HostKey::Slash => Key::Slash,
        HostKey::Semicolon => Key::Semicolon,
        HostKey::Equals => Key::Equal,
        HostKey::LeftBracket => Key::LeftBracket,
        HostKey::Backslash => Key::Backslash,
        HostKey::RightBracket => Key::RightBracket,
        HostKey::Tilde => Key::GraveAccent,
        HostKey::CapsLock => Key::CapsLock,
        HostKey::ScrollLock => Key::ScrollLock,
        HostKey::NumLock => Key::NumLock,
        HostKey::PrintScreen => Key::PrintScreen,
        HostKey::Pause => Key::Pause,
        HostKey::NumPadZero => Key::Keypad0,
        HostKey::NumPadOne => Key::Keypad1,
        HostKey::NumPadTwo => Key::Keypad2,
        HostKey::NumPadThree => Key::Keypad3,
        HostKey::NumPadFour => Key::Keypad4,
        HostKey::NumPadFive => Key::Keypad5,
        HostKey::NumPadSix => Key::Keypad6,
        HostKey::NumPadSeven => Key::Keypad7,
        HostKey::NumPadEight => Key::Keypad8,
        HostKey::NumPadNine => Key::Keypad9,
        HostKey::Decimal => Key::KeypadDecimal,
        HostKey::Divide => Key::KeypadDivide,
        HostKey::Multiply => Key::KeypadMultiply,
        HostKey::Subtract => Key::KeypadSubtract,
        HostKey::Add => Key::KeypadAdd,
        HostKey::NumPadEnter => Key::KeypadEnter,
        HostKey::NumPadEquals => Key::KeypadEqual,
        HostKey::GamepadSpecialRight => Key::GamepadStart,
        HostKey::GamepadSpecialLeft => Key::GamepadBack,
        HostKey::GamepadFaceButtonLeft => Key::GamepadFaceLeft,
        HostKey::GamepadFaceButtonRight => Key::GamepadFaceRight,
        HostKey::GamepadFaceButtonTop => Key::GamepadFaceUp,
        HostKey::GamepadFaceButtonBottom => Key::GamepadFaceDown,
        HostKey::GamepadDPadLeft => Key::GamepadDpadLeft,
        HostKey::GamepadDPadRight => Key::GamepadDpadRight,
        HostKey::GamepadDPadUp => Key::GamepadDpadUp,
        HostKey::GamepadDPadDown => Key::GamepadDpadDown,
        HostKey::GamepadLeftShoulder => Key::GamepadL1,
        HostKey::GamepadRightShoulder => Key::GamepadR1,
        HostKey::GamepadLeftTrigger => Key::GamepadL2,
        HostKey::GamepadRightTrigger => Key::GamepadR2,
        HostKey::GamepadLeftThumbstick => Key::GamepadL3,
        HostKey::GamepadRightThumbstick => Key::GamepadR3,
        HostKey::GamepadLeftStickLeft => Key::GamepadLStickLeft,
        HostKey::GamepadLeftStickRight => Key::GamepadLStickRight,
        HostKey::GamepadLeftStickUp => Key::GamepadLStickUp,
        HostKey::GamepadLeftStickDown => Key::GamepadLStickDown,
        HostKey::GamepadRightStickLeft => Key::GamepadRStickLeft,
        HostKey::GamepadRightStickRight => Key::GamepadRStickRight,
        HostKey::GamepadRightStickUp => Key::GamepadRStickUp,
        HostKey::GamepadRightStickDown => Key::GamepadRStickDown,
    }
}

/// Maps a host pointer button to a library mouse button.
///
/// Only left, right, and middle exist on the library side; other buttons yield `None`.
pub fn convert_mouse_button(button: PointerButton) -> Option<MouseButton> {
    match button {
        PointerButton::Left => Some(MouseButton::Left),
        PointerButton::Right => Some(MouseButton::Right),
        PointerButton::Middle => Some(MouseButton::Middle),
        PointerButton::Thumb1 | PointerButton::Thumb2 => None,
    }
}

/// Maps a cursor shape requested by the library to the host cursor.
pub fn convert_cursor(cursor: MouseCursor) -> HostCursor {
    match cursor {
        MouseCursor::None => HostCursor::None,
        MouseCursor::Arrow => HostCursor::Default,
        MouseCursor::TextInput => HostCursor::TextEditBeam,
        MouseCursor::ResizeAll => HostCursor::CardinalCross,
        MouseCursor::ResizeNS => HostCursor::ResizeUpDown,
        MouseCursor::ResizeEW => HostCursor::ResizeLeftRight,
        MouseCursor::ResizeNESW => HostCursor::ResizeSouthWest,
        MouseCursor::ResizeNWSE => HostCursor::ResizeSouthEast,
        MouseCursor::Hand => HostCursor::Hand,
        MouseCursor::NotAllowed => HostCursor::SlashedCircle,
    }
}
