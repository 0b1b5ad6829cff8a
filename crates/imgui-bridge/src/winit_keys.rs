//! Conversions from winit input identifiers to host identifiers.

use winit::event::MouseButton;
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::host::{HostKey, ModifierKeys, PointerButton};

/// Maps a winit physical key to a host key.
pub fn host_key_from_physical(key: PhysicalKey) -> HostKey {
    match key {
        PhysicalKey::Code(code) => host_key_from_code(code),
        PhysicalKey::Unidentified(_) => HostKey::Unknown,
    }
}

/// Maps a winit key code to a host key.
pub fn host_key_from_code(code: KeyCode) -> HostKey {
    match code {
        KeyCode::Tab => HostKey::Tab,
        KeyCode::ArrowLeft => HostKey::Left,
        KeyCode::ArrowRight => HostKey::Right,
        KeyCode::ArrowUp => HostKey::Up,
        KeyCode::ArrowDown => HostKey::Down,
        KeyCode::PageUp => HostKey::PageUp,
        KeyCode::PageDown => HostKey::PageDown,
        KeyCode::Home => HostKey::Home,
        KeyCode::End => HostKey::End,
        KeyCode::Insert => HostKey::Insert,
        KeyCode::Delete => HostKey::Delete,
        KeyCode::Backspace => HostKey::BackSpace,
        KeyCode::Space => HostKey::SpaceBar,
        KeyCode::Enter => HostKey::Enter,
        KeyCode::Escape => HostKey::Escape,
        KeyCode::ControlLeft => HostKey::LeftControl,
        KeyCode::ShiftLeft => HostKey::LeftShift,
        KeyCode::AltLeft => HostKey::LeftAlt,
        KeyCode::SuperLeft => HostKey::LeftCommand,
        KeyCode::ControlRight => HostKey::RightControl,
        KeyCode::ShiftRight => HostKey::RightShift,
        KeyCode::AltRight => HostKey::RightAlt,
        KeyCode::SuperRight => HostKey::RightCommand,
        KeyCode::ContextMenu => HostKey::Menu,
        KeyCode::Digit0 => HostKey::Zero,
        KeyCode::Digit1 => HostKey::One,
        KeyCode::Digit2 => HostKey::Two,
        KeyCode::Digit3 => HostKey::Three,
        KeyCode::Digit4 => HostKey::Four,
        KeyCode::Digit5 => HostKey::Five,
        KeyCode::Digit6 => HostKey::Six,
        KeyCode::Digit7 => HostKey::Seven,
        KeyCode::Digit8 => HostKey::Eight,
        KeyCode::Digit9 => HostKey::Nine,
        KeyCode::KeyA => HostKey::A,
        KeyCode::KeyB => HostKey::B,
        KeyCode::KeyC => HostKey::C,
        KeyCode::KeyD => HostKey::D,
        KeyCode::KeyE => HostKey::E,
        KeyCode::KeyF => HostKey::F,
        KeyCode::KeyG => HostKey::G,
        KeyCode::KeyH => HostKey::H,
        KeyCode::KeyI => HostKey::I,
        KeyCode::KeyJ => HostKey::J,
        KeyCode::KeyK => HostKey::K,
        KeyCode::KeyL => HostKey::L,
        KeyCode::KeyM => HostKey::M,
        KeyCode::KeyN => HostKey::N,
        KeyCode::KeyO => HostKey::O,
        KeyCode::KeyP => HostKey::P,
        KeyCode::KeyQ => HostKey::Q,
        KeyCode::KeyR => HostKey::R,
        KeyCode::KeyS => HostKey::S,
        KeyCode::KeyT => HostKey::T,
        KeyCode::KeyU => HostKey::U,
        KeyCode::KeyV => HostKey::V,
        KeyCode::KeyW => HostKey::W,
        KeyCode::KeyX => HostKey::X,
        KeyCode::KeyY => HostKey::Y,
        KeyCode::KeyZ => HostKey::Z,
        KeyCode::F1 => HostKey::F1,
        KeyCode::F2 => HostKey::F2,
        KeyCode::F3 => HostKey::F3,
        KeyCode::F4 => HostKey::F4,
        KeyCode::F5 => HostKey::F5,
        KeyCode::F6 => HostKey::F6,
        KeyCode::F7 => HostKey::F7,
        KeyCode::F8 => HostKey::F8,
        KeyCode::F9 => HostKey::F9,
        KeyCode::F10 => HostKey::F10,
        KeyCode::F11 => HostKey::F11,
        KeyCode::F12 => HostKey::F12,
        KeyCode::Quote => HostKey::Apostrophe,
        KeyCode::Comma => HostKey::Comma,
        KeyCode::Minus => HostKey::Hyphen,
        KeyCode::Period => HostKey::Period,
        KeyCode::Slash => HostKey::Slash,
        KeyCode::Semicolon => HostKey::Semicolon,
        KeyCode::Equal => HostKey::Equals,
        KeyCode::BracketLeft => HostKey::LeftBracket,
        KeyCode::Backslash => HostKey::Backslash,
        KeyCode::BracketRight => HostKey::RightBracket,
        KeyCode::Backquote => HostKey::Tilde,
        KeyCode::CapsLock => HostKey::CapsLock,
        KeyCode::ScrollLock => HostKey::ScrollLock,
        KeyCode::NumLock => HostKey::NumLock,
        KeyCode::PrintScreen => HostKey::PrintScreen,
        KeyCode::Pause => HostKey::Pause,
        KeyCode::Numpad0 => HostKey::NumPadZero,
        KeyCode::Numpad1 => HostKey::NumPadOne,
        KeyCode::Numpad2 => HostKey::NumPadTwo,
        KeyCode::Numpad3 => HostKey::NumPadThree,
        KeyCode::Numpad4 => HostKey::NumPadFour,
        KeyCode::Numpad5 => HostKey::NumPadFive,
        KeyCode::Numpad6 => HostKey::NumPadSix,
        KeyCode::Numpad7 => HostKey::NumPadSeven,
        KeyCode::Numpad8 => HostKey::NumPadEight,
        KeyCode::Numpad9 => HostKey::NumPadNine,
        KeyCode::NumpadDecimal => HostKey::Decimal,
        KeyCode::NumpadDivide => HostKey::Divide,
        KeyCode::NumpadMultiply => HostKey::Multiply,
        KeyCode::NumpadSubtract => HostKey::Subtract,
        KeyCode::NumpadAdd => HostKey::Add,
        KeyCode::NumpadEnter => HostKey::NumPadEnter,
        KeyCode::NumpadEqual => HostKey::NumPadEquals,
        _ => HostKey::Unknown,
    }
}

/// Maps a winit mouse button to a host pointer button.
pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Right => Some(PointerButton::Right),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Back => Some(PointerButton::Thumb1),
        MouseButton::Forward => Some(PointerButton::Thumb2),
        MouseButton::Other(_) => None,
    }
}

/// Maps winit modifier state to host modifier keys.
pub fn modifier_keys(state: ModifiersState) -> ModifierKeys {
    ModifierKeys {
        control: state.control_key(),
        shift: state.shift_key(),
        alt: state.alt_key(),
        command: state.super_key(),
    }
}
