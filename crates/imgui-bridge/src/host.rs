//! Host-side abstractions: the application singleton, its input
//! pre-processor chain, and the event types it dispatches.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Affine2, Vec2};

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an overlay widget, used by the host focus system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

impl OverlayId {
    /// Allocates a new unique id.
    pub fn next() -> Self {
        Self(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Keys as identified by the host.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKey {
    Unknown,
    Tab,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    BackSpace,
    SpaceBar,
    Enter,
    Escape,
    LeftControl,
    LeftShift,
    LeftAlt,
    LeftCommand,
    RightControl,
    RightShift,
    RightAlt,
    RightCommand,
    Menu,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
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
    Hyphen,
    Period,
    Slash,
    Semicolon,
    Equals,
    LeftBracket,
    Backslash,
    RightBracket,
    Tilde,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    NumPadZero,
    NumPadOne,
    NumPadTwo,
    NumPadThree,
    NumPadFour,
    NumPadFive,
    NumPadSix,
    NumPadSeven,
    NumPadEight,
    NumPadNine,
    Decimal,
    Divide,
    Multiply,
    Subtract,
    Add,
    NumPadEnter,
    NumPadEquals,
    GamepadSpecialRight,
    GamepadSpecialLeft,
    GamepadFaceButtonLeft,
    GamepadFaceButtonRight,
    GamepadFaceButtonTop,
    GamepadFaceButtonBottom,
    GamepadDPadLeft,
    GamepadDPadRight,
    GamepadDPadUp,
    GamepadDPadDown,
    GamepadLeftShoulder,
    GamepadRightShoulder,
    GamepadLeftTrigger,
    GamepadRightTrigger,
    GamepadLeftThumbstick,
    GamepadRightThumbstick,
    GamepadLeftStickLeft,
    GamepadLeftStickRight,
    GamepadLeftStickUp,
    GamepadLeftStickDown,
    GamepadRightStickLeft,
    GamepadRightStickRight,
    GamepadRightStickUp,
    GamepadRightStickDown,
}

/// Pointer buttons as identified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Thumb1,
    Thumb2,
}

/// Cursor shapes the host can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCursor {
    /// Hidden cursor.
    None,
    Default,
    TextEditBeam,
    CardinalCross,
    ResizeUpDown,
    ResizeLeftRight,
    ResizeSouthWest,
    ResizeSouthEast,
    Hand,
    SlashedCircle,
}

/// Modifier key state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierKeys {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    /// Command on macOS, the Windows key elsewhere.
    pub command: bool,
}

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: HostKey,
    pub modifiers: ModifierKeys,
}

impl KeyEvent {
    /// Creates a key event with the given modifier state.
    pub fn new(key: HostKey, modifiers: ModifierKeys) -> Self {
        Self { key, modifiers }
    }
}

/// An analog axis or trigger update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogInputEvent {
    pub key: HostKey,
    /// Signed analog value, typically in `[-1, 1]`.
    pub value: f32,
    pub modifiers: ModifierKeys,
}

/// A pointer event: movement, button, or wheel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Pointer position in host screen space.
    pub screen_position: Vec2,
    /// Button that triggered a button event.
    pub effecting_button: Option<PointerButton>,
    /// Vertical wheel delta in detents.
    pub wheel_delta: f32,
    /// Two-axis gesture delta, when the event came from a gesture.
    pub gesture_delta: Vec2,
    pub modifiers: ModifierKeys,
}

impl PointerEvent {
    /// A move event at `position`.
    pub fn moved(position: Vec2) -> Self {
        Self {
            screen_position: position,
            ..Self::default()
        }
    }

    /// A button event for `button` at `position`.
    pub fn button(position: Vec2, button: PointerButton) -> Self {
        Self {
            screen_position: position,
            effecting_button: Some(button),
            ..Self::default()
        }
    }

    /// A wheel event with vertical `delta`.
    pub fn wheel(position: Vec2, delta: f32) -> Self {
        Self {
            screen_position: position,
            wheel_delta: delta,
            ..Self::default()
        }
    }
}

/// Raw input events routed through the pre-processor chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostInputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    AnalogInput(AnalogInputEvent),
    MouseMove(PointerEvent),
    MouseButtonDown(PointerEvent),
    MouseButtonUp(PointerEvent),
    MouseButtonDoubleClick(PointerEvent),
    MouseWheel {
        event: PointerEvent,
        gesture: Option<PointerEvent>,
    },
}

/// Result of a widget event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Handled,
    Unhandled,
}

impl Reply {
    /// Returns true for [`Reply::Handled`].
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// How a widget participates in painting and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Painted, but never the target of pointer hit-tests.
    HitTestInvisible,
    Hidden,
}

/// Geometry handed to a widget's paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintGeometry {
    /// Accumulated render transform from the window root to this widget.
    pub accumulated_transform: Affine2,
    /// Size allotted by the host layout.
    pub local_size: Vec2,
}

impl PaintGeometry {
    /// Geometry at `offset` with the given allotted size.
    pub fn new(offset: Vec2, local_size: Vec2) -> Self {
        Self {
            accumulated_transform: Affine2::from_translation(offset),
            local_size,
        }
    }
}

/// A shared pre-processor as stored in the host's chain.
pub type SharedPreProcessor = Rc<RefCell<dyn InputPreProcessor>>;

/// The host application singleton as seen by the bridge.
///
/// Every method takes `&self`: hosts keep their mutable state behind interior
/// mutability, so overlays may register or unregister while the host is in the
/// middle of a dispatch or tick. Hosts must not hold a borrow of their
/// pre-processor chain while calling into it.
pub trait HostApplication {
    /// Returns false once the host has shut down; no other call is valid afterwards.
    fn is_initialized(&self) -> bool;

    /// Returns true if a gamepad is currently connected.
    fn is_gamepad_attached(&self) -> bool;

    /// Warps the platform cursor to a screen-space position.
    fn set_cursor_pos(&self, position: Vec2);

    /// Changes the platform cursor shape.
    fn set_cursor_type(&self, cursor: HostCursor);

    /// Returns true if any widget currently holds mouse capture.
    fn has_any_mouse_captor(&self) -> bool;

    /// Returns true if `overlay` currently has keyboard focus.
    fn has_keyboard_focus(&self, overlay: OverlayId) -> bool;

    /// Requests keyboard focus for `overlay`.
    fn set_keyboard_focus(&self, overlay: OverlayId);

    /// Inserts a pre-processor at `index` in the chain (0 = front).
    fn register_input_pre_processor(&self, processor: SharedPreProcessor, index: i32);

    /// Removes a previously registered pre-processor.
    fn unregister_input_pre_processor(&self, processor: &SharedPreProcessor);
}

/// An interceptor that sees raw input before the host's widgets do.
///
/// Handlers return true when the event is consumed and must not be
/// dispatched further.
pub trait InputPreProcessor {
    /// Polled once per host tick.
    fn tick(&mut self, delta_time: f32, app: &dyn HostApplication);

    fn handle_key_down(&mut self, _app: &dyn HostApplication, _event: &KeyEvent) -> bool {
        false
    }

    fn handle_key_up(&mut self, _app: &dyn HostApplication, _event: &KeyEvent) -> bool {
        false
    }

    fn handle_analog_input(&mut self, _app: &dyn HostApplication, _event: &AnalogInputEvent) -> bool {
        false
    }

    fn handle_mouse_move(&mut self, _app: &dyn HostApplication, _event: &PointerEvent) -> bool {
        false
    }

    fn handle_mouse_button_down(&mut self, _app: &dyn HostApplication, _event: &PointerEvent) -> bool {
        false
    }

    fn handle_mouse_button_up(&mut self, _app: &dyn HostApplication, _event: &PointerEvent) -> bool {
        false
    }

    fn handle_mouse_button_double_click(
        &mut self,
        _app: &dyn HostApplication,
        _event: &PointerEvent,
    ) -> bool {
        false
    }

    fn handle_mouse_wheel_or_gesture(
        &mut self,
        _app: &dyn HostApplication,
        _event: &PointerEvent,
        _gesture: Option<&PointerEvent>,
    ) -> bool {
        false
    }

    /// Called when the host application gains or loses activation.
    fn on_application_activation_changed(&mut self, _active: bool) {}

    /// Routes `event` to the matching handler.
    fn handle_event(&mut self, app: &dyn HostApplication, event: &HostInputEvent) -> bool {
        match event {
            HostInputEvent::KeyDown(key) => self.handle_key_down(app, key),
            HostInputEvent::KeyUp(key) => self.handle_key_up(app, key),
            HostInputEvent::AnalogInput(analog) => self.handle_analog_input(app, analog),
            HostInputEvent::MouseMove(pointer) => self.handle_mouse_move(app, pointer),
            HostInputEvent::MouseButtonDown(pointer) => self.handle_mouse_button_down(app, pointer),
            HostInputEvent::MouseButtonUp(pointer) => self.handle_mouse_button_up(app, pointer),
            HostInputEvent::MouseButtonDoubleClick(pointer) => {
                self.handle_mouse_button_double_click(app, pointer)
            }
            HostInputEvent::MouseWheel { event, gesture } => {
                self.handle_mouse_wheel_or_gesture(app, event, gesture.as_ref())
            }
        }
    }
}
