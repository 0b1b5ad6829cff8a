//! Drives an overlay against a minimal in-process host.
//!
//! Run with `RUST_LOG=debug cargo run -p imgui-bridge --example headless_overlay`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use imgui_bridge::*;

#[derive(Default)]
struct ConsoleHost {
    processors: RefCell<Vec<SharedPreProcessor>>,
    focused: Cell<Option<OverlayId>>,
}

impl HostApplication for ConsoleHost {
    fn is_initialized(&self) -> bool {
        true
    }

    fn is_gamepad_attached(&self) -> bool {
        false
    }

    fn set_cursor_pos(&self, position: Vec2) {
        log::info!("cursor warped to {position}");
    }

    fn set_cursor_type(&self, cursor: HostCursor) {
        log::info!("cursor shape {cursor:?}");
    }

    fn has_any_mouse_captor(&self) -> bool {
        false
    }

    fn has_keyboard_focus(&self, overlay: OverlayId) -> bool {
        self.focused.get() == Some(overlay)
    }

    fn set_keyboard_focus(&self, overlay: OverlayId) {
        log::info!("keyboard focus -> {overlay:?}");
        self.focused.set(Some(overlay));
    }

    fn register_input_pre_processor(&self, processor: SharedPreProcessor, index: i32) {
        let mut processors = self.processors.borrow_mut();
        let slot = usize::try_from(index).unwrap_or(0).min(processors.len());
        processors.insert(slot, processor);
    }

    fn unregister_input_pre_processor(&self, processor: &SharedPreProcessor) {
        self.processors
            .borrow_mut()
            .retain(|entry| !Rc::ptr_eq(entry, processor));
    }
}

fn dispatch(host: &ConsoleHost, event: &HostInputEvent) -> bool {
    let chain = host.processors.borrow().clone();
    chain
        .iter()
        .any(|processor| processor.borrow_mut().handle_event(host, event))
}

/// Builds what the library would emit for a small window: a background and two text runs.
fn window_frame() -> FrameDrawData {
    let clip = Vec4::new(0.0, 0.0, 320.0, 200.0);
    let mut list = DrawList::new();
    for (quad, color) in [0xFF30_3030_u32, 0xFFFF_FFFF, 0xFFFF_FFFF].into_iter().enumerate() {
        let x = 20.0 * quad as f32;
        list.vtx_buffer.extend([
            DrawVert::new(Vec2::new(x, 0.0), Vec2::ZERO, color),
            DrawVert::new(Vec2::new(x + 20.0, 0.0), Vec2::X, color),
            DrawVert::new(Vec2::new(x + 20.0, 20.0), Vec2::ONE, color),
        ]);
        let base = DrawIdx::try_from(quad * 3).unwrap_or_default();
        list.idx_buffer.extend([base, base + 1, base + 2]);
        let texture = if quad == 0 { TextureId::NULL } else { TextureId(1) };
        list.cmd_buffer
            .push(DrawCmd::new(clip, texture, 0, u32::from(base), 3));
    }

    let mut frame = FrameDrawData::new(Vec2::new(320.0, 200.0));
    frame.push_list(list);
    frame
}

fn main() -> Result<()> {
    env_logger::init();

    let host = Rc::new(ConsoleHost::default());
    let app: Rc<dyn HostApplication> = host.clone();

    let options = BridgeOptions::from_json_str(r#"{ "update_mouse_cursor": true }"#)?;
    let mut overlay = Overlay::new(OverlayArgs::new().options(options), &app)?;

    let mut textures = TextureRegistry::new();
    textures.insert(
        TextureId(1),
        TextureInfo {
            resource: ResourceHandle(1),
            width: 512,
            height: 64,
        },
    );

    // Library frame: take its output.
    let mut frame = window_frame();
    overlay.set_draw_data(&mut frame);

    // Host paint pass.
    let mut elements = DrawElementList::new();
    let geometry = PaintGeometry::new(Vec2::new(40.0, 40.0), Vec2::new(1280.0, 720.0));
    overlay.paint(&geometry, 0, &textures, &mut elements);
    for draw in elements.draw_calls() {
        log::info!(
            "layer {} brush {:?}: {} vertices, {} indices",
            draw.layer,
            draw.brush.resource,
            draw.vertices.len(),
            draw.indices.len()
        );
    }

    // Host input.
    overlay.context().with_io(|io| io.want_capture_mouse = true);
    let consumed = dispatch(
        &host,
        &HostInputEvent::MouseButtonDown(PointerEvent::button(
            Vec2::new(50.0, 50.0),
            PointerButton::Left,
        )),
    );
    log::info!("left press consumed by overlay: {consumed}");

    overlay.context().with_io(|io| io.want_text_input = true);
    let reply = overlay.on_key_char('h');
    log::info!("text reply {reply:?}");

    let events = overlay.context().with_io(Io::take_events);
    log::info!("library received {} events: {events:?}", events.len());
    Ok(())
}
