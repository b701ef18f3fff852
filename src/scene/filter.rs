//! Selective transform inheritance.
//!
//! By default a child inherits everything above it. A filter node breaks that
//! for its own children: while visiting, it undoes its parent's full matrix and
//! re-applies only the parent components its flags admit, then its own matrix.

use crate::scene::node::Pose;
use crate::transform::affine::AffineTransform;

/// Which default policy a filter starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FilterKind {
    /// Re-admits rotation and translation by default.
    #[default]
    Transform,
    /// Re-admits translation only by default.
    Translate,
}

impl FilterKind {
    /// Preset a fresh filter of this kind starts with.
    #[must_use]
    pub fn default_preset(self) -> FilterPreset {
        match self {
            Self::Transform => FilterPreset::InheritRotationAndTranslation,
            Self::Translate => FilterPreset::InheritOnlyTranslation,
        }
    }
}

/// Named combinations of the three exclusion flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FilterPreset {
    /// Nothing excluded.
    InheritAll,
    /// Translation and scale excluded.
    InheritOnlyRotation,
    /// Translation and rotation excluded.
    InheritOnlyScale,
    /// Rotation and scale excluded.
    InheritOnlyTranslation,
    /// Scale excluded.
    InheritRotationAndTranslation,
}

impl FilterPreset {
    /// `(exclude_translation, exclude_rotation, exclude_scale)`.
    #[must_use]
    pub fn exclusions(self) -> (bool, bool, bool) {
        match self {
            Self::InheritAll => (false, false, false),
            Self::InheritOnlyRotation => (true, false, true),
            Self::InheritOnlyScale => (true, true, false),
            Self::InheritOnlyTranslation => (false, true, true),
            Self::InheritRotationAndTranslation => (false, false, true),
        }
    }
}

/// Filter state carried by a [`NodeKind::Filter`](crate::NodeKind::Filter) node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Filter {
    kind: FilterKind,
    exclude_translation: bool,
    exclude_rotation: bool,
    exclude_scale: bool,
    scratch: AffineTransform,
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(FilterKind::default())
    }
}

impl Filter {
    /// Filter of `kind` with that kind's default preset.
    #[must_use]
    pub fn new(kind: FilterKind) -> Self {
        Self::with_preset(kind, kind.default_preset())
    }

    /// Filter of `kind` starting from `preset`.
    #[must_use]
    pub fn with_preset(kind: FilterKind, preset: FilterPreset) -> Self {
        let (t, r, s) = preset.exclusions();
        Self {
            kind,
            exclude_translation: t,
            exclude_rotation: r,
            exclude_scale: s,
            scratch: AffineTransform::IDENTITY,
        }
    }

    /// Rotation + translation filter.
    #[must_use]
    pub fn transform_filter() -> Self {
        Self::new(FilterKind::Transform)
    }

    /// Translation-only filter.
    #[must_use]
    pub fn translate_filter() -> Self {
        Self::new(FilterKind::Translate)
    }

    /// Kind this filter was created as.
    #[must_use]
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Switches to a named preset.
    pub fn set_preset(&mut self, preset: FilterPreset) {
        let (t, r, s) = preset.exclusions();
        self.set_exclusions(t, r, s);
    }

    /// Sets the three exclusion flags directly.
    pub fn set_exclusions(&mut self, translation: bool, rotation: bool, scale: bool) {
        self.exclude_translation = translation;
        self.exclude_rotation = rotation;
        self.exclude_scale = scale;
    }

    /// `(exclude_translation, exclude_rotation, exclude_scale)`.
    #[must_use]
    pub fn exclusions(&self) -> (bool, bool, bool) {
        (
            self.exclude_translation,
            self.exclude_rotation,
            self.exclude_scale,
        )
    }

    /// Filtered parent matrix computed by the most recent visit or mapping.
    #[must_use]
    pub fn filtered(&self) -> &AffineTransform {
        &self.scratch
    }

    /// Rebuilds the scratch matrix from `parent` and returns it.
    pub(crate) fn filter_parent(&mut self, parent: &Pose) -> AffineTransform {
        self.scratch = calc_filtered_transform(
            parent,
            self.exclude_translation,
            self.exclude_rotation,
            self.exclude_scale,
        );
        self.scratch
    }
}

/// Rebuilds `parent`'s local matrix from the admitted components only.
///
/// Starts from identity, then translates by the parent position unless
/// translation is excluded, rotates unless rotation is excluded or zero, and
/// scales unless scale is excluded or one.
#[must_use]
pub fn calc_filtered_transform(
    parent: &Pose,
    exclude_translation: bool,
    exclude_rotation: bool,
    exclude_scale: bool,
) -> AffineTransform {
    let mut out = AffineTransform::IDENTITY;
    if !exclude_translation {
        out.make_translate(parent.position.x, parent.position.y);
    }
    if !exclude_rotation && parent.rotation != 0.0 {
        out.rotate(parent.rotation);
    }
    if !exclude_scale && parent.scale != 1.0 {
        out.scale(parent.scale, parent.scale);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/filter.rs"]
mod tests;
