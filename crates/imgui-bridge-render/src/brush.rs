//! Texture handle resolution into host brushes.

use std::collections::HashMap;

use glam::Vec2;
use imgui_bridge_core::TextureId;

/// Host rendering resource backing a brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle(pub u64);

/// A host texture a library texture handle resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub resource: ResourceHandle,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

/// Maps opaque library texture handles to host textures.
pub trait TextureResolver {
    /// Returns the host texture for `id`, or `None` if it cannot be resolved.
    fn resolve(&self, id: TextureId) -> Option<TextureInfo>;
}

/// Kind of image a brush carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushImageType {
    #[default]
    NoImage,
    FullColor,
}

/// How the host should draw a brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushDrawType {
    #[default]
    NoDrawType,
    Image,
}

/// Host brush attached to an emitted primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Brush {
    pub resource: Option<ResourceHandle>,
    pub image_size: Vec2,
    pub image_type: BrushImageType,
    pub draw_as: BrushDrawType,
}

impl Brush {
    /// A brush without texture; geometry drawn with it is flat-colored.
    pub fn none() -> Self {
        Self::default()
    }

    /// A full-color image brush for `texture`.
    pub fn from_texture(texture: &TextureInfo) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let image_size = Vec2::new(texture.width as f32, texture.height as f32);
        Self {
            resource: Some(texture.resource),
            image_size,
            image_type: BrushImageType::FullColor,
            draw_as: BrushDrawType::Image,
        }
    }

    /// Returns true if the brush samples a texture.
    pub fn is_textured(&self) -> bool {
        self.resource.is_some()
    }
}

/// Reuses the last resolved brush while the texture handle stays the same.
#[derive(Debug, Default)]
pub(crate) struct BrushCache {
    texture: Option<TextureId>,
    brush: Brush,
}

impl BrushCache {
    pub(crate) fn reset(&mut self) {
        self.texture = None;
        self.brush = Brush::none();
    }

    pub(crate) fn resolve(&mut self, id: TextureId, resolver: &dyn TextureResolver) -> Brush {
        if self.texture != Some(id) {
            self.brush = if id.is_null() {
                Brush::none()
            } else {
                resolver.resolve(id).map_or_else(Brush::none, |texture| Brush::from_texture(&texture))
            };
            if !id.is_null() && !self.brush.is_textured() {
                log::trace!("texture {id:?} did not resolve, drawing untextured");
            }
            self.texture = Some(id);
        }
        self.brush
    }
}

/// Texture table owned by the host.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: HashMap<TextureId, TextureInfo>,
}

impl TextureRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the host texture for `id`.
    pub fn insert(&mut self, id: TextureId, texture: TextureInfo) {
        self.textures.insert(id, texture);
    }

    /// Removes the texture for `id`.
    pub fn remove(&mut self, id: TextureId) -> Option<TextureInfo> {
        self.textures.remove(&id)
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns true if no texture is registered.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureResolver for TextureRegistry {
    fn resolve(&self, id: TextureId) -> Option<TextureInfo> {
        self.textures.get(&id).copied()
    }
}
