//! Layer transform applied to the swiped element.

/// Transform and alpha for one rendered frame of the swiped element.
///
/// Mirrors the graphics layer a renderer applies on top of layout: the
/// element is translated, then rotated around its center, then scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    /// Rotation around the element center, in degrees. Positive is clockwise.
    pub rotation_z: f32,
}

impl GraphicsLayer {
    pub const IDENTITY: GraphicsLayer = GraphicsLayer {
        alpha: 1.0,
        scale: 1.0,
        translation_x: 0.0,
        translation_y: 0.0,
        rotation_z: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self::IDENTITY
    }
}
