//! View geometry: the [`World`] capability and a fixed [`Viewport`].

use crate::foundation::core::Size;
use crate::foundation::error::{SceneError, SceneResult};
use crate::transform::affine::AffineTransform;

/// The window a tree is presented in.
///
/// Implemented by the host's graphics-device binding; [`Viewport`] is the
/// in-crate implementation.
pub trait World {
    /// Logical view size.
    fn view_size(&self) -> Size;

    /// View-to-device matrix (letterboxing, DPI scaling).
    fn view_transform(&self) -> AffineTransform;
}

/// Fixed-size view with an explicit view-to-device matrix.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    size: Size,
    transform: AffineTransform,
}

impl Viewport {
    /// View of `width` x `height` mapped 1:1 onto the device.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] for non-positive or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> SceneResult<Self> {
        let size = checked_size(width, height)?;
        Ok(Self {
            size,
            transform: AffineTransform::IDENTITY,
        })
    }

    /// View of `width` x `height` letterboxed into a `device` surface: scaled
    /// uniformly to fit and centred along the slack axis.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] for non-positive or non-finite dimensions.
    pub fn fit(width: f64, height: f64, device: Size) -> SceneResult<Self> {
        let size = checked_size(width, height)?;
        checked_size(device.width, device.height)?;
        let k = (device.width / size.width).min(device.height / size.height);
        let mut transform = AffineTransform::IDENTITY;
        transform.translate(
            (device.width - size.width * k) * 0.5,
            (device.height - size.height * k) * 0.5,
        );
        transform.scale(k, k);
        Ok(Self { size, transform })
    }

    /// Replaces the view-to-device matrix.
    #[must_use]
    pub fn with_transform(self, transform: AffineTransform) -> Self {
        Self { transform, ..self }
    }
}

impl World for Viewport {
    fn view_size(&self) -> Size {
        self.size
    }

    fn view_transform(&self) -> AffineTransform {
        self.transform
    }
}

fn checked_size(width: f64, height: f64) -> SceneResult<Size> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(SceneError::validation(format!(
            "view size must be positive and finite, got {width}x{height}"
        )));
    }
    Ok(Size::new(width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/space/world.rs"]
mod tests;
