//! Host draw-element output.

use glam::Vec2;

use crate::brush::Brush;
use crate::error::{RenderError, RenderResult};
use crate::vertex::{HostIndex, HostVertex};

/// Axis-aligned clip rectangle in host screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ClipRect {
    /// Creates a clip rectangle from its corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Width and height.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Returns true if the rectangle has zero (or negative) width or height.
    pub fn is_empty(&self) -> bool {
        let size = self.size();
        size.x <= 0.0 || size.y <= 0.0
    }

    /// Returns true if `point` lies inside the rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Receiver of host-native draw primitives.
///
/// Every primitive is wrapped in a clip push/pop pair.
pub trait DrawSink {
    /// Pushes a clipping zone for subsequent primitives.
    fn push_clip(&mut self, clip: ClipRect);

    /// Pops the most recent clipping zone.
    fn pop_clip(&mut self);

    /// Emits one custom-vertex primitive at `layer`.
    fn draw_custom_verts(
        &mut self,
        layer: i32,
        brush: &Brush,
        vertices: &[HostVertex],
        indices: &[HostIndex],
    );
}

/// A recorded custom-vertex primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomVertsElement {
    pub layer: i32,
    pub brush: Brush,
    pub vertices: Vec<HostVertex>,
    pub indices: Vec<HostIndex>,
}

/// One recorded host draw element.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawElement {
    PushClip(ClipRect),
    PopClip,
    CustomVerts(CustomVertsElement),
}

/// A [`DrawSink`] that records elements in emission order.
#[derive(Debug, Default)]
pub struct DrawElementList {
    elements: Vec<DrawElement>,
}

impl DrawElementList {
    /// Creates an empty element list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded elements in order.
    pub fn elements(&self) -> &[DrawElement] {
        &self.elements
    }

    /// Recorded custom-vertex primitives in order.
    pub fn draw_calls(&self) -> impl Iterator<Item = &CustomVertsElement> {
        self.elements.iter().filter_map(|element| match element {
            DrawElement::CustomVerts(draw) => Some(draw),
            _ => None,
        })
    }

    /// Number of recorded primitives.
    pub fn draw_call_count(&self) -> usize {
        self.draw_calls().count()
    }

    /// Clears the list for the next frame.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Checks that every pushed clip was popped exactly once.
    pub fn check_clip_balance(&self) -> RenderResult<()> {
        let mut depth = 0usize;
        for (element, entry) in self.elements.iter().enumerate() {
            match entry {
                DrawElement::PushClip(_) => depth += 1,
                DrawElement::PopClip => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(RenderError::PopWithoutPush { element })?;
                }
                DrawElement::CustomVerts(_) => {}
            }
        }
        if depth == 0 {
            Ok(())
        } else {
            Err(RenderError::UnbalancedClip { depth })
        }
    }
}

impl DrawSink for DrawElementList {
    fn push_clip(&mut self, clip: ClipRect) {
        self.elements.push(DrawElement::PushClip(clip));
    }

    fn pop_clip(&mut self) {
        self.elements.push(DrawElement::PopClip);
    }

    fn draw_custom_verts(
        &mut self,
        layer: i32,
        brush: &Brush,
        vertices: &[HostVertex],
        indices: &[HostIndex],
    ) {
        self.elements.push(DrawElement::CustomVerts(CustomVertsElement {
            layer,
            brush: *brush,
            vertices: vertices.to_vec(),
            indices: indices.to_vec(),
        }));
    }
}
