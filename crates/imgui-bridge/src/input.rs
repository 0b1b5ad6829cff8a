//! Input pre-processor that feeds host input into the library's I/O queue.
//!
//! The bridge keeps no state of its own beyond configuration: every decision
//! reads the library's want flags, and every write goes through a scoped
//! activation of the shared context.

use imgui_bridge_core::{
    BackendFlags, BridgeOptions, ConfigFlags, ContextHandle, Io, Key, MOUSE_POS_OUT_OF_BOUNDS,
};

use crate::host::{
    AnalogInputEvent, HostApplication, HostCursor, InputPreProcessor, KeyEvent, ModifierKeys,
    OverlayId, PointerEvent,
};
use crate::keys::{convert_cursor, convert_key, convert_mouse_button};

/// Host requests collected while the library context is bound.
#[derive(Debug, Default)]
struct TickRequests {
    toggled_gamepad: bool,
    cursor_pos: Option<glam::Vec2>,
    cursor_type: Option<HostCursor>,
    wants_focus: bool,
}

/// Translates host input into library events for one overlay.
#[derive(Debug)]
pub struct InputBridge {
    owner: OverlayId,
    context: ContextHandle,
    analog_deadzone: f32,
    update_mouse_cursor: bool,
}

impl InputBridge {
    /// Creates a bridge feeding `context` on behalf of the overlay `owner`.
    pub fn new(owner: OverlayId, context: ContextHandle, options: &BridgeOptions) -> Self {
        Self {
            owner,
            context,
            analog_deadzone: options.analog_deadzone,
            update_mouse_cursor: options.update_mouse_cursor,
        }
    }

    /// The overlay this bridge requests focus for.
    pub fn owner(&self) -> OverlayId {
        self.owner
    }

    /// The shared library context.
    pub fn context(&self) -> &ContextHandle {
        &self.context
    }

    fn sync_modifiers(io: &mut Io, modifiers: ModifierKeys) {
        io.add_key_event(Key::ModCtrl, modifiers.control);
        io.add_key_event(Key::ModShift, modifiers.shift);
        io.add_key_event(Key::ModAlt, modifiers.alt);
        io.add_key_event(Key::ModSuper, modifiers.command);
    }

    fn handle_key(&self, event: &KeyEvent, down: bool) -> bool {
        self.context.with_io(|io| {
            io.add_key_event(convert_key(event.key), down);
            Self::sync_modifiers(io, event.modifiers);
            io.want_capture_keyboard
        })
    }

    fn handle_button(&self, event: &PointerEvent, down: bool) -> bool {
        self.context.with_io(|io| {
            if let Some(button) = event.effecting_button.and_then(convert_mouse_button) {
                io.add_mouse_button_event(button, down);
            }
            io.want_capture_mouse
        })
    }

    fn cursor_request(io: &Io) -> Option<HostCursor> {
        if !io.want_capture_mouse || io.config_flags.contains(ConfigFlags::NO_MOUSE_CURSOR_CHANGE)
        {
            return None;
        }
        if io.mouse_draw_cursor {
            Some(HostCursor::None)
        } else {
            Some(convert_cursor(io.mouse_cursor))
        }
    }
}

impl InputPreProcessor for InputBridge {
    fn tick(&mut self, _delta_time: f32, app: &dyn HostApplication) {
        let gamepad_attached = app.is_gamepad_attached();
        let scope = self.context.activate();

        // The I/O borrow ends before any host call so hosts may re-enter the bridge.
        let requests = {
            let mut io = scope.io_mut();
            let mut requests = TickRequests::default();

            let has_gamepad = io.backend_flags.contains(BackendFlags::HAS_GAMEPAD);
            if has_gamepad != gamepad_attached {
                io.backend_flags ^= BackendFlags::HAS_GAMEPAD;
                requests.toggled_gamepad = true;
            }

            if io.want_set_mouse_pos {
                requests.cursor_pos = Some(io.mouse_pos);
            }

            if self.update_mouse_cursor {
                requests.cursor_type = Self::cursor_request(&io);
            }

            requests.wants_focus = io.want_text_input;
            requests
        };

        if requests.toggled_gamepad {
            log::debug!("gamepad attached state changed for overlay {:?}", self.owner);
        }
        if let Some(position) = requests.cursor_pos {
            app.set_cursor_pos(position);
        }
        if let Some(cursor) = requests.cursor_type {
            app.set_cursor_type(cursor);
        }
        if requests.wants_focus && !app.has_keyboard_focus(self.owner) {
            app.set_keyboard_focus(self.owner);
        }
    }

    fn handle_key_down(&mut self, _app: &dyn HostApplication, event: &KeyEvent) -> bool {
        self.handle_key(event, true)
    }

    fn handle_key_up(&mut self, _app: &dyn HostApplication, event: &KeyEvent) -> bool {
        self.handle_key(event, false)
    }

    fn handle_analog_input(
        &mut self,
        _app: &dyn HostApplication,
        event: &AnalogInputEvent,
    ) -> bool {
        let deadzone = self.analog_deadzone;
        self.context.with_io(|io| {
            io.add_key_analog_event(
                convert_key(event.key),
                event.value.abs() > deadzone,
                event.value,
            );
            io.want_capture_keyboard
        })
    }

    fn handle_mouse_move(&mut self, app: &dyn HostApplication, event: &PointerEvent) -> bool {
        let captured = app.has_any_mouse_captor();
        self.context.with_io(|io| {
            if captured {
                io.add_mouse_pos_event(MOUSE_POS_OUT_OF_BOUNDS.x, MOUSE_POS_OUT_OF_BOUNDS.y);
                return false;
            }
            io.add_mouse_pos_event(event.screen_position.x, event.screen_position.y);
            io.want_capture_mouse
        })
    }

    fn handle_mouse_button_down(
        &mut self,
        _app: &dyn HostApplication,
        event: &PointerEvent,
    ) -> bool {
        self.handle_button(event, true)
    }

    fn handle_mouse_button_up(
        &mut self,
        _app: &dyn HostApplication,
        event: &PointerEvent,
    ) -> bool {
        self.handle_button(event, false);
        false
    }

    fn handle_mouse_button_double_click(
        &mut self,
        _app: &dyn HostApplication,
        event: &PointerEvent,
    ) -> bool {
        self.handle_button(event, true)
    }

    fn handle_mouse_wheel_or_gesture(
        &mut self,
        _app: &dyn HostApplication,
        event: &PointerEvent,
        _gesture: Option<&PointerEvent>,
    ) -> bool {
        self.context.with_io(|io| {
            io.add_mouse_wheel_event(0.0, event.wheel_delta);
            io.want_capture_mouse
        })
    }

    fn on_application_activation_changed(&mut self, active: bool) {
        self.context.with_io(|io| io.add_focus_event(active));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostKey, PointerButton, SharedPreProcessor};
    use glam::Vec2;
    use imgui_bridge_core::{current_context_id, InputEvent, MouseButton, MouseCursor};
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingHost {
        gamepad: Cell<bool>,
        captor: Cell<bool>,
        focused: Cell<Option<OverlayId>>,
        cursor_positions: RefCell<Vec<Vec2>>,
        cursor_types: RefCell<Vec<HostCursor>>,
    }

    impl RecordingHost {
        fn with_captor() -> Self {
            let host = Self::default();
            host.captor.set(true);
            host
        }
    }

    impl HostApplication for RecordingHost {
        fn is_initialized(&self) -> bool {
            true
        }
        fn is_gamepad_attached(&self) -> bool {
            self.gamepad.get()
        }
        fn set_cursor_pos(&self, position: Vec2) {
            self.cursor_positions.borrow_mut().push(position);
        }
        fn set_cursor_type(&self, cursor: HostCursor) {
            self.cursor_types.borrow_mut().push(cursor);
        }
        fn has_any_mouse_captor(&self) -> bool {
            self.captor.get()
        }
        fn has_keyboard_focus(&self, overlay: OverlayId) -> bool {
            self.focused.get() == Some(overlay)
        }
        fn set_keyboard_focus(&self, overlay: OverlayId) {
            self.focused.set(Some(overlay));
        }
        fn register_input_pre_processor(&self, _processor: SharedPreProcessor, _index: i32) {}
        fn unregister_input_pre_processor(&self, _processor: &SharedPreProcessor) {}
    }

    fn bridge() -> InputBridge {
        InputBridge::new(
            OverlayId::next(),
            ContextHandle::create(),
            &BridgeOptions::default(),
        )
    }

    fn drain(bridge: &InputBridge) -> Vec<InputEvent> {
        bridge.context().with_io(Io::take_events)
    }

    #[test]
    fn test_key_down_resyncs_modifiers() {
        let mut bridge = bridge();
        let host = RecordingHost::default();
        let modifiers = ModifierKeys {
            control: true,
            ..ModifierKeys::default()
        };

        let consumed = bridge.handle_key_down(&host, &KeyEvent::new(HostKey::C, modifiers));
        assert!(!consumed);

        let events = drain(&bridge);
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[0],
            InputEvent::Key {
                key: Key::C,
                down: true,
                analog_value: 1.0
            }
        );
        assert_eq!(
            events[1],
            InputEvent::Key {
                key: Key::ModCtrl,
                down: true,
                analog_value: 1.0
            }
        );
        assert_eq!(
            events[2],
            InputEvent::Key {
                key: Key::ModShift,
                down: false,
                analog_value: 0.0
            }
        );
    }

    #[test]
    fn test_key_returns_keyboard_capture() {
        let mut bridge = bridge();
        let host = RecordingHost::default();
        bridge.context().with_io(|io| io.want_capture_keyboard = true);

        let event = KeyEvent::new(HostKey::Enter, ModifierKeys::default());
        assert!(bridge.handle_key_down(&host, &event));
        assert!(bridge.handle_key_up(&host, &event));
    }

    #[test]
    fn test_unknown_key_still_syncs_modifiers() {
        let mut bridge = bridge();
        let host = RecordingHost::default();

        let event = KeyEvent::new(HostKey::Unknown, ModifierKeys::default());
        bridge.handle_key_down(&host, &event);

        let events = drain(&bridge);
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|event| matches!(
            event,
            InputEvent::Key { key, down: false, .. } if key.is_modifier()
        )));
    }

    #[test]
    fn test_analog_deadzone() {
        let mut bridge = bridge();
        let host = RecordingHost::default();

        for value in [0.05, -0.5] {
            bridge.handle_analog_input(
                &host,
                &AnalogInputEvent {
                    key: HostKey::GamepadLeftTrigger,
                    value,
                    modifiers: ModifierKeys::default(),
                },
            );
        }

        let events = drain(&bridge);
        assert_eq!(
            events,
            vec![
                InputEvent::Key {
                    key: Key::GamepadL2,
                    down: false,
                    analog_value: 0.05
                },
                InputEvent::Key {
                    key: Key::GamepadL2,
                    down: true,
                    analog_value: -0.5
                },
            ]
        );
    }

    #[test]
    fn test_mouse_move_under_capture_sends_sentinel() {
        let mut bridge = bridge();
        let host = RecordingHost::with_captor();
        bridge.context().with_io(|io| io.want_capture_mouse = true);

        let consumed = bridge.handle_mouse_move(&host, &PointerEvent::moved(Vec2::new(4.0, 5.0)));
        assert!(!consumed);
        assert_eq!(
            drain(&bridge),
            vec![InputEvent::MousePos(MOUSE_POS_OUT_OF_BOUNDS)]
        );

        host.captor.set(false);
        assert!(bridge.handle_mouse_move(&host, &PointerEvent::moved(Vec2::new(4.0, 5.0))));
        assert_eq!(
            drain(&bridge),
            vec![InputEvent::MousePos(Vec2::new(4.0, 5.0))]
        );
    }

    #[test]
    fn test_button_up_never_consumed() {
        let mut bridge = bridge();
        let host = RecordingHost::default();
        bridge.context().with_io(|io| io.want_capture_mouse = true);

        let press = PointerEvent::button(Vec2::ZERO, PointerButton::Left);
        assert!(bridge.handle_mouse_button_down(&host, &press));
        assert!(!bridge.handle_mouse_button_up(&host, &press));
        assert_eq!(
            drain(&bridge),
            vec![
                InputEvent::MouseButton {
                    button: MouseButton::Left,
                    down: true
                },
                InputEvent::MouseButton {
                    button: MouseButton::Left,
                    down: false
                },
            ]
        );
    }

    #[test]
    fn test_unmapped_button_ignored() {
        let mut bridge = bridge();
        let host = RecordingHost::default();

        let thumb = PointerEvent::button(Vec2::ZERO, PointerButton::Thumb1);
        assert!(!bridge.handle_mouse_button_down(&host, &thumb));
        assert!(drain(&bridge).is_empty());
    }

    #[test]
    fn test_double_click_is_button_down() {
        let mut bridge = bridge();
        let host = RecordingHost::default();

        let click = PointerEvent::button(Vec2::ZERO, PointerButton::Right);
        bridge.handle_mouse_button_double_click(&host, &click);
        assert_eq!(
            drain(&bridge),
            vec![InputEvent::MouseButton {
                button: MouseButton::Right,
                down: true
            }]
        );
    }

    #[test]
    fn test_wheel_sends_vertical_only() {
        let mut bridge = bridge();
        let host = RecordingHost::default();

        let mut wheel = PointerEvent::wheel(Vec2::ZERO, 2.0);
        wheel.gesture_delta = Vec2::new(3.0, 0.0);
        bridge.handle_mouse_wheel_or_gesture(&host, &wheel, Some(&wheel));
        assert_eq!(
            drain(&bridge),
            vec![InputEvent::MouseWheel(Vec2::new(0.0, 2.0))]
        );
    }

    #[test]
    fn test_tick_toggles_gamepad_only_on_change() {
        let mut bridge = bridge();
        let host = RecordingHost::default();
        host.gamepad.set(true);

        bridge.tick(0.016, &host);
        assert!(bridge
            .context()
            .with_io(|io| io.backend_flags.contains(BackendFlags::HAS_GAMEPAD)));

        bridge.tick(0.016, &host);
        assert!(bridge
            .context()
            .with_io(|io| io.backend_flags.contains(BackendFlags::HAS_GAMEPAD)));

        host.gamepad.set(false);
        bridge.tick(0.016, &host);
        let flags = bridge.context().with_io(|io| io.backend_flags);
        assert!(!flags.contains(BackendFlags::HAS_GAMEPAD));
        assert!(flags.contains(BackendFlags::RENDERER_HAS_VTX_OFFSET));
    }

    #[test]
    fn test_tick_warps_cursor_and_requests_focus() {
        let mut bridge = bridge();
        let host = RecordingHost::default();
        bridge.context().with_io(|io| {
            io.want_set_mouse_pos = true;
            io.mouse_pos = Vec2::new(10.0, 20.0);
            io.want_text_input = true;
        });

        bridge.tick(0.016, &host);
        assert_eq!(*host.cursor_positions.borrow(), vec![Vec2::new(10.0, 20.0)]);
        assert_eq!(host.focused.get(), Some(bridge.owner()));
        assert!(host.cursor_types.borrow().is_empty());
        assert_eq!(current_context_id(), None);
    }

    #[test]
    fn test_tick_cursor_sync() {
        let mut options = BridgeOptions::default();
        options.update_mouse_cursor = true;
        let mut bridge = InputBridge::new(OverlayId::next(), ContextHandle::create(), &options);
        let host = RecordingHost::default();

        bridge.tick(0.016, &host);
        assert!(host.cursor_types.borrow().is_empty());

        bridge.context().with_io(|io| {
            io.want_capture_mouse = true;
            io.mouse_cursor = MouseCursor::TextInput;
        });
        bridge.tick(0.016, &host);
        assert_eq!(*host.cursor_types.borrow(), vec![HostCursor::TextEditBeam]);

        bridge.context().with_io(|io| io.mouse_draw_cursor = true);
        bridge.tick(0.016, &host);
        assert_eq!(host.cursor_types.borrow().last(), Some(&HostCursor::None));

        bridge
            .context()
            .with_io(|io| io.config_flags.insert(ConfigFlags::NO_MOUSE_CURSOR_CHANGE));
        bridge.tick(0.016, &host);
        assert_eq!(host.cursor_types.borrow().len(), 2);
    }

    proptest! {
        #[test]
        fn prop_analog_pressed_outside_deadzone(value in -1.0f32..1.0) {
            let mut bridge = bridge();
            let host = RecordingHost::default();
            bridge.handle_analog_input(
                &host,
                &AnalogInputEvent {
                    key: HostKey::GamepadRightTrigger,
                    value,
                    modifiers: ModifierKeys::default(),
                },
            );
            prop_assert_eq!(
                drain(&bridge),
                vec![InputEvent::Key {
                    key: Key::GamepadR2,
                    down: value.abs() > 0.1,
                    analog_value: value,
                }]
            );
        }

        #[test]
        fn prop_mouse_move_under_capture_ignores_position(
            x in -1.0e4f32..1.0e4,
            y in -1.0e4f32..1.0e4,
        ) {
            let mut bridge = bridge();
            let host = RecordingHost::with_captor();
            bridge.context().with_io(|io| io.want_capture_mouse = true);
            prop_assert!(!bridge.handle_mouse_move(&host, &PointerEvent::moved(Vec2::new(x, y))));
            prop_assert_eq!(drain(&bridge), vec![InputEvent::MousePos(MOUSE_POS_OUT_OF_BOUNDS)]);
        }
    }

    #[test]
    fn test_activation_forwards_focus() {
        let mut bridge = bridge();
        bridge.on_application_activation_changed(false);
        assert_eq!(drain(&bridge), vec![InputEvent::Focus(false)]);
    }
}
