//! The host-visible overlay widget.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;
use imgui_bridge_core::{BridgeOptions, ContextHandle, DrawData, FrameDrawData, Result};
use imgui_bridge_render::{paint_transform, DrawSink, DrawTranslator, TextureResolver};

use crate::host::{
    HostApplication, OverlayId, PaintGeometry, Reply, SharedPreProcessor, Visibility,
};
use crate::input::InputBridge;

/// Construction arguments for an [`Overlay`].
#[derive(Debug, Clone, Default)]
pub struct OverlayArgs {
    context: Option<ContextHandle>,
    options: BridgeOptions,
}

impl OverlayArgs {
    /// Default arguments: a fresh context and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts an existing shared context instead of creating one.
    pub fn context(mut self, context: ContextHandle) -> Self {
        self.context = Some(context);
        self
    }

    /// Replaces the bridge options.
    pub fn options(mut self, options: BridgeOptions) -> Self {
        self.options = options;
        self
    }

    /// Toggles installation of the input bridge.
    pub fn handle_input(mut self, handle_input: bool) -> Self {
        self.options.handle_input = handle_input;
        self
    }
}

/// A zero-size drawable that paints the library's last frame and owns its input bridge.
pub struct Overlay {
    id: OverlayId,
    context: ContextHandle,
    draw_data: DrawData,
    translator: DrawTranslator,
    input_processor: Option<SharedPreProcessor>,
    host: Weak<dyn HostApplication>,
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("id", &self.id)
            .field("context", &self.context)
            .field("lists", &self.draw_data.draw_lists().len())
            .field("input_bridge", &self.input_processor.is_some())
            .finish_non_exhaustive()
    }
}

impl Overlay {
    /// Creates an overlay and, if requested, registers its input bridge with `host`.
    ///
    /// Registration is skipped when the host is not initialized. It may happen
    /// while the host is dispatching input or ticking its pre-processors.
    pub fn new(args: OverlayArgs, host: &Rc<dyn HostApplication>) -> Result<Self> {
        let OverlayArgs { context, options } = args;
        options.validate()?;

        let id = OverlayId::next();
        let context = context.unwrap_or_else(ContextHandle::create);

        let input_processor = if options.handle_input {
            Self::register_bridge(id, &context, &options, host)
        } else {
            None
        };

        Ok(Self {
            id,
            context,
            draw_data: DrawData::default(),
            translator: DrawTranslator::new(&options),
            input_processor,
            host: Rc::downgrade(host),
        })
    }

    fn register_bridge(
        id: OverlayId,
        context: &ContextHandle,
        options: &BridgeOptions,
        host: &Rc<dyn HostApplication>,
    ) -> Option<SharedPreProcessor> {
        if !host.is_initialized() {
            log::warn!("host not initialized, overlay {id:?} runs without input bridge");
            return None;
        }

        let processor: SharedPreProcessor =
            Rc::new(RefCell::new(InputBridge::new(id, context.clone(), options)));
        host.register_input_pre_processor(Rc::clone(&processor), options.input_priority);
        log::debug!(
            "registered input bridge for overlay {id:?} at priority {}",
            options.input_priority
        );
        Some(processor)
    }

    /// This overlay's identity in the host focus system.
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// The shared library context.
    pub fn context(&self) -> &ContextHandle {
        &self.context
    }

    /// The snapshot painted by the next paint pass.
    pub fn draw_data(&self) -> &DrawData {
        &self.draw_data
    }

    /// Returns true if an input bridge is registered with the host.
    pub fn has_input_bridge(&self) -> bool {
        self.input_processor.is_some()
    }

    /// Takes ownership of the library's frame output, replacing the previous snapshot.
    pub fn set_draw_data(&mut self, source: &mut FrameDrawData) {
        self.draw_data = DrawData::capture(source);
        self.context.with_state(|state| state.frame_count += 1);
    }

    /// Paints the current snapshot and returns the last layer used.
    pub fn paint(
        &mut self,
        geometry: &PaintGeometry,
        layer: i32,
        textures: &dyn TextureResolver,
        sink: &mut dyn DrawSink,
    ) -> i32 {
        let transform = paint_transform(&geometry.accumulated_transform, self.draw_data.display_pos);
        let _scope = self.context.activate();
        let stats = self
            .translator
            .translate(&self.draw_data, &transform, layer, textures, sink);
        log::trace!("overlay {:?} painted {stats:?}", self.id);
        layer
    }

    /// The overlay has no intrinsic size; the host stretches it to its container.
    pub fn desired_size(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Painted but never hit-tested.
    pub fn visibility(&self) -> Visibility {
        Visibility::HitTestInvisible
    }

    /// Accepts keyboard focus so character input arrives through [`Overlay::on_key_char`].
    pub fn supports_keyboard_focus(&self) -> bool {
        true
    }

    /// Queues a typed character. Handled while the library expects text input.
    ///
    /// Characters are narrowed to one byte; code points above `0xFF` arrive as `?`.
    pub fn on_key_char(&mut self, character: char) -> Reply {
        let narrow = u8::try_from(u32::from(character)).unwrap_or(b'?');
        self.context.with_io(|io| {
            io.add_input_character(u32::from(narrow));
            if io.want_text_input {
                Reply::Handled
            } else {
                Reply::Unhandled
            }
        })
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        let Some(processor) = self.input_processor.take() else {
            return;
        };
        let Some(host) = self.host.upgrade() else {
            log::warn!("host gone, skipping input bridge teardown for {:?}", self.id);
            return;
        };
        if !host.is_initialized() {
            log::warn!("host shut down, skipping input bridge teardown for {:?}", self.id);
            return;
        }
        host.unregister_input_pre_processor(&processor);
        log::debug!("unregistered input bridge for overlay {:?}", self.id);
    }
}
