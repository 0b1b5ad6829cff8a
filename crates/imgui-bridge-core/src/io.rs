//! Library I/O state: the input event queue and the per-frame want flags.

use glam::Vec2;

/// Mouse position reported when the pointer is not over the library's surface.
pub const MOUSE_POS_OUT_OF_BOUNDS: Vec2 = Vec2::new(-f32::MAX, -f32::MAX);

crate::bridge_flags! {
    /// Capabilities the backend advertises to the library.
    pub struct BackendFlags: u32 {
        /// A gamepad is connected and gamepad keys are being fed.
        const HAS_GAMEPAD = 1 << 0;
        /// The backend honors the requested mouse cursor shape.
        const HAS_MOUSE_CURSORS = 1 << 1;
        /// The backend honors mouse position warp requests.
        const HAS_SET_MOUSE_POS = 1 << 2;
        /// The renderer supports non-zero vertex offsets.
        const RENDERER_HAS_VTX_OFFSET = 1 << 3;
    }
}

crate::bridge_flags! {
    /// Application-side configuration of the library.
    pub struct ConfigFlags: u32 {
        /// Keyboard navigation is enabled.
        const NAV_ENABLE_KEYBOARD = 1 << 0;
        /// Gamepad navigation is enabled.
        const NAV_ENABLE_GAMEPAD = 1 << 1;
        /// The library ignores mouse input.
        const NO_MOUSE = 1 << 4;
        /// The backend must not alter the host cursor shape.
        const NO_MOUSE_CURSOR_CHANGE = 1 << 5;
    }
}

/// Keys understood by the library.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    #[default]
    None,
    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,
    LeftCtrl,
    LeftShift,
    LeftAlt,
    LeftSuper,
    RightCtrl,
    RightShift,
    RightAlt,
    RightSuper,
    Menu,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadDecimal,
    KeypadDivide,
    KeypadMultiply,
    KeypadSubtract,
    KeypadAdd,
    KeypadEnter,
    KeypadEqual,
    GamepadStart,
    GamepadBack,
    GamepadFaceLeft,
    GamepadFaceRight,
    GamepadFaceUp,
    GamepadFaceDown,
    GamepadDpadLeft,
    GamepadDpadRight,
    GamepadDpadUp,
    GamepadDpadDown,
    GamepadL1,
    GamepadR1,
    GamepadL2,
    GamepadR2,
    GamepadL3,
    GamepadR3,
    GamepadLStickLeft,
    GamepadLStickRight,
    GamepadLStickUp,
    GamepadLStickDown,
    GamepadRStickLeft,
    GamepadRStickRight,
    GamepadRStickUp,
    GamepadRStickDown,
    /// Aggregate Ctrl modifier state.
    ModCtrl,
    /// Aggregate Shift modifier state.
    ModShift,
    /// Aggregate Alt modifier state.
    ModAlt,
    /// Aggregate Super/Cmd modifier state.
    ModSuper,
}

impl Key {
    /// Returns true for the aggregate modifier keys.
    pub fn is_modifier(self) -> bool {
        matches!(self, Self::ModCtrl | Self::ModShift | Self::ModAlt | Self::ModSuper)
    }

    /// Returns true for gamepad buttons and axes.
    pub fn is_gamepad(self) -> bool {
        matches!(
            self,
            Self::GamepadStart
                | Self::GamepadBack
                | Self::GamepadFaceLeft
                | Self::GamepadFaceRight
                | Self::GamepadFaceUp
                | Self::GamepadFaceDown
                | Self::GamepadDpadLeft
                | Self::GamepadDpadRight
                | Self::GamepadDpadUp
                | Self::GamepadDpadDown
                | Self::GamepadL1
                | Self::GamepadR1
                | Self::GamepadL2
                | Self::GamepadR2
                | Self::GamepadL3
                | Self::GamepadR3
                | Self::GamepadLStickLeft
                | Self::GamepadLStickRight
                | Self::GamepadLStickUp
                | Self::GamepadLStickDown
                | Self::GamepadRStickLeft
                | Self::GamepadRStickRight
                | Self::GamepadRStickUp
                | Self::GamepadRStickDown
        )
    }
}

/// Mouse buttons understood by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl MouseButton {
    /// Index of the button in the library's button arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Cursor shapes the library may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseCursor {
    /// Hide the cursor.
    None,
    #[default]
    Arrow,
    TextInput,
    ResizeAll,
    ResizeNS,
    ResizeEW,
    ResizeNESW,
    ResizeNWSE,
    Hand,
    NotAllowed,
}

/// An input event queued for the library's next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key state change with its analog magnitude.
    Key { key: Key, down: bool, analog_value: f32 },
    /// Pointer moved to a position in host screen space.
    MousePos(Vec2),
    /// Mouse button pressed or released.
    MouseButton { button: MouseButton, down: bool },
    /// Wheel scrolled by `(horizontal, vertical)` detents.
    MouseWheel(Vec2),
    /// Application gained or lost focus.
    Focus(bool),
    /// A text character as a code point.
    Text(u32),
}

/// The library's I/O block.
///
/// Backends queue input through the `add_*` methods and read back the want
/// flags the library computed during its last frame.
#[derive(Debug, Clone)]
pub struct Io {
    events: Vec<InputEvent>,

    /// The library wants to consume mouse input.
    pub want_capture_mouse: bool,
    /// The library wants to consume keyboard input.
    pub want_capture_keyboard: bool,
    /// A text field is active and character input is expected.
    pub want_text_input: bool,
    /// The library asks the backend to warp the cursor to `mouse_pos`.
    pub want_set_mouse_pos: bool,
    /// Current mouse position as seen by the library.
    pub mouse_pos: Vec2,
    /// The library draws its own software cursor.
    pub mouse_draw_cursor: bool,
    /// Cursor shape requested for this frame.
    pub mouse_cursor: MouseCursor,
    pub backend_flags: BackendFlags,
    pub config_flags: ConfigFlags,
}

impl Default for Io {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            want_capture_mouse: false,
            want_capture_keyboard: false,
            want_text_input: false,
            want_set_mouse_pos: false,
            mouse_pos: MOUSE_POS_OUT_OF_BOUNDS,
            mouse_draw_cursor: false,
            mouse_cursor: MouseCursor::Arrow,
            backend_flags: BackendFlags::RENDERER_HAS_VTX_OFFSET,
            config_flags: ConfigFlags::EMPTY,
        }
    }
}

impl Io {
    /// Creates an I/O block with no pending events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a digital key event.
    pub fn add_key_event(&mut self, key: Key, down: bool) {
        self.add_key_analog_event(key, down, if down { 1.0 } else { 0.0 });
    }

    /// Queues a key event with an analog magnitude. [`Key::None`] is ignored.
    pub fn add_key_analog_event(&mut self, key: Key, down: bool, analog_value: f32) {
        if key == Key::None {
            return;
        }
        self.events.push(InputEvent::Key {
            key,
            down,
            analog_value,
        });
    }

    /// Queues a mouse position event.
    pub fn add_mouse_pos_event(&mut self, x: f32, y: f32) {
        self.events.push(InputEvent::MousePos(Vec2::new(x, y)));
    }

    /// Queues a mouse button event.
    pub fn add_mouse_button_event(&mut self, button: MouseButton, down: bool) {
        self.events.push(InputEvent::MouseButton { button, down });
    }

    /// Queues a mouse wheel event.
    pub fn add_mouse_wheel_event(&mut self, wheel_x: f32, wheel_y: f32) {
        self.events
            .push(InputEvent::MouseWheel(Vec2::new(wheel_x, wheel_y)));
    }

    /// Queues an application focus change.
    pub fn add_focus_event(&mut self, focused: bool) {
        self.events.push(InputEvent::Focus(focused));
    }

    /// Queues a text character. The null code point is ignored.
    pub fn add_input_character(&mut self, code_point: u32) {
        if code_point == 0 {
            return;
        }
        self.events.push(InputEvent::Text(code_point));
    }

    /// Events queued since the last drain.
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Drains the queued events, as the library does at the start of a frame.
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}
