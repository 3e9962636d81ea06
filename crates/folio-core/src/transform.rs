//! Ordered CSS transform pipeline.
//!
//! CSS transforms do not commute, so every transform the engine writes goes
//! through [`Transform`], whose `Display` impl is the single place where the
//! stage order is decided:
//!
//! `perspective → translate3d → scale → rotateX → rotateY`
//!
//! Perspective comes first so the rotations that follow are projected
//! through it. Unset stages are omitted from the output.

use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub perspective: Option<f32>,
    pub translate: Option<Vec3>,
    pub scale: Option<f32>,
    pub rotate_x_deg: Option<f32>,
    pub rotate_y_deg: Option<f32>,
}

impl Transform {
    /// Identity transform (renders as `none`).
    pub const IDENTITY: Self = Self {
        perspective: None,
        translate: None,
        scale: None,
        rotate_x_deg: None,
        rotate_y_deg: None,
    };

    /// 2D translation on the compositor-friendly `translate3d` path.
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: Some(Vec3::new(x, y, 0.0)),
            ..Self::IDENTITY
        }
    }

    pub fn scale(s: f32) -> Self {
        Self {
            scale: Some(s),
            ..Self::IDENTITY
        }
    }

    pub fn with_perspective(mut self, px: f32) -> Self {
        self.perspective = Some(px);
        self
    }

    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate = Some(Vec3::new(x, y, 0.0));
        self
    }

    pub fn with_scale(mut self, s: f32) -> Self {
        self.scale = Some(s);
        self
    }

    pub fn with_rotation(mut self, rotate_x_deg: f32, rotate_y_deg: f32) -> Self {
        self.rotate_x_deg = Some(rotate_x_deg);
        self.rotate_y_deg = Some(rotate_y_deg);
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// CSS `transform` property value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("none");
        }
        let mut sep = "";
        if let Some(p) = self.perspective {
            write!(f, "{sep}perspective({p}px)")?;
            sep = " ";
        }
        if let Some(t) = self.translate {
            write!(f, "{sep}translate3d({}px, {}px, {}px)", t.x, t.y, t.z)?;
            sep = " ";
        }
        if let Some(s) = self.scale {
            write!(f, "{sep}scale({s})")?;
            sep = " ";
        }
        if let Some(rx) = self.rotate_x_deg {
            write!(f, "{sep}rotateX({rx}deg)")?;
            sep = " ";
        }
        if let Some(ry) = self.rotate_y_deg {
            write!(f, "{sep}rotateY({ry}deg)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_render_in_fixed_order_regardless_of_build_order() {
        let t = Transform::IDENTITY
            .with_rotation(10.0, -5.0)
            .with_scale(0.8)
            .with_translate(3.0, 4.0)
            .with_perspective(1000.0);
        assert_eq!(
            t.to_css(),
            "perspective(1000px) translate3d(3px, 4px, 0px) scale(0.8) rotateX(10deg) rotateY(-5deg)"
        );
    }

    #[test]
    fn identity_renders_none() {
        assert_eq!(Transform::IDENTITY.to_css(), "none");
        assert_eq!(Transform::scale(0.5).to_css(), "scale(0.5)");
    }
}
