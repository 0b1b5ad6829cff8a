//! A headless host application shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use imgui_bridge::*;

/// Routes logs through the test harness once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A host that records every request and dispatches input through its pre-processor chain.
#[derive(Default)]
pub struct HeadlessHost {
    pub initialized: Cell<bool>,
    pub gamepad_attached: Cell<bool>,
    pub mouse_captor: Cell<bool>,
    pub focused: Cell<Option<OverlayId>>,
    pub cursor_positions: RefCell<Vec<Vec2>>,
    pub cursor_types: RefCell<Vec<HostCursor>>,
    pub unregister_calls: Cell<usize>,
    processors: RefCell<Vec<SharedPreProcessor>>,
}

impl HeadlessHost {
    /// Creates an initialized host and its trait-object view.
    pub fn shared() -> (Rc<HeadlessHost>, Rc<dyn HostApplication>) {
        let host = Rc::new(HeadlessHost::default());
        host.initialized.set(true);
        let app: Rc<dyn HostApplication> = host.clone();
        (host, app)
    }

    pub fn processor_count(&self) -> usize {
        self.processors.borrow().len()
    }

    pub fn processor_at(&self, index: usize) -> Option<SharedPreProcessor> {
        self.processors.borrow().get(index).cloned()
    }

    /// Simulates the host tearing down its application singleton.
    pub fn shutdown(&self) {
        self.initialized.set(false);
    }
}

impl HostApplication for HeadlessHost {
    fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    fn is_gamepad_attached(&self) -> bool {
        self.gamepad_attached.get()
    }

    fn set_cursor_pos(&self, position: Vec2) {
        self.cursor_positions.borrow_mut().push(position);
    }

    fn set_cursor_type(&self, cursor: HostCursor) {
        self.cursor_types.borrow_mut().push(cursor);
    }

    fn has_any_mouse_captor(&self) -> bool {
        self.mouse_captor.get()
    }

    fn has_keyboard_focus(&self, overlay: OverlayId) -> bool {
        self.focused.get() == Some(overlay)
    }

    fn set_keyboard_focus(&self, overlay: OverlayId) {
        self.focused.set(Some(overlay));
    }

    fn register_input_pre_processor(&self, processor: SharedPreProcessor, index: i32) {
        let mut processors = self.processors.borrow_mut();
        let slot = usize::try_from(index)
            .unwrap_or(usize::MAX)
            .min(processors.len());
        processors.insert(slot, processor);
    }

    fn unregister_input_pre_processor(&self, processor: &SharedPreProcessor) {
        assert!(self.initialized.get(), "unregister called on a shut down host");
        self.unregister_calls.set(self.unregister_calls.get() + 1);
        self.processors
            .borrow_mut()
            .retain(|entry| !Rc::ptr_eq(entry, processor));
    }
}

/// A copy of the chain, so processors may register or unregister mid-dispatch.
fn chain(host: &HeadlessHost) -> Vec<SharedPreProcessor> {
    host.processors.borrow().clone()
}

/// Offers `event` to each pre-processor in order. Returns true if one consumed it.
pub fn dispatch(host: &HeadlessHost, event: &HostInputEvent) -> bool {
    chain(host)
        .iter()
        .any(|processor| processor.borrow_mut().handle_event(host, event))
}

/// Runs one host tick over the chain.
pub fn tick(host: &HeadlessHost, delta_time: f32) {
    for processor in chain(host) {
        processor.borrow_mut().tick(delta_time, host);
    }
}

/// Notifies the chain that the application gained or lost activation.
pub fn set_active(host: &HeadlessHost, active: bool) {
    for processor in chain(host) {
        processor.borrow_mut().on_application_activation_changed(active);
    }
}

/// A draw list with one 10x10 quad per entry of `commands`, all sharing one vertex buffer.
pub fn quad_list(commands: &[(Vec4, TextureId)]) -> DrawList {
    let mut list = DrawList::new();
    for (quad, &(clip, texture)) in commands.iter().enumerate() {
        let base = u16::try_from(list.vtx_buffer.len()).unwrap();
        let x = quad as f32 * 10.0;
        list.vtx_buffer.extend([
            DrawVert::new(Vec2::new(x, 0.0), Vec2::new(0.0, 0.0), 0xFF00_00FF),
            DrawVert::new(Vec2::new(x + 10.0, 0.0), Vec2::new(1.0, 0.0), 0xFF00_00FF),
            DrawVert::new(Vec2::new(x + 10.0, 10.0), Vec2::new(1.0, 1.0), 0xFF00_00FF),
            DrawVert::new(Vec2::new(x, 10.0), Vec2::new(0.0, 1.0), 0xFF00_00FF),
        ]);
        let idx_offset = u32::try_from(list.idx_buffer.len()).unwrap();
        list.idx_buffer
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        list.cmd_buffer
            .push(DrawCmd::new(clip, texture, 0, idx_offset, 6));
    }
    list
}

/// A valid frame holding `lists`.
pub fn frame(lists: Vec<DrawList>) -> FrameDrawData {
    let mut frame = FrameDrawData::new(Vec2::new(640.0, 480.0));
    for list in lists {
        frame.push_list(list);
    }
    frame
}

pub fn full_clip() -> Vec4 {
    Vec4::new(0.0, 0.0, 640.0, 480.0)
}
