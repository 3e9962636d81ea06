use crate::constants::*;

/// Opacities of the hero section for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFade {
    /// Scroll progress in `[0, 1]`.
    pub progress: f32,
    /// Animated assemblies; may go negative, which hides them.
    pub content_opacity: f32,
    /// "Scroll" hint, clamped to `[0, 1]`.
    pub indicator_opacity: f32,
    /// Darkening overlay, clamped to `[0, 1]`.
    pub overlay_opacity: f32,
}

impl HeroFade {
    pub fn from_scroll(scroll_y: f32, viewport_height: f32) -> Self {
        let span = viewport_height * HERO_FADE_DISTANCE_RATIO;
        let progress = if span > 0.0 && scroll_y.is_finite() {
            (scroll_y / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            progress,
            content_opacity: 1.0 - progress * HERO_CONTENT_FADE_RATE,
            indicator_opacity: (1.0 - progress * HERO_INDICATOR_FADE_RATE).clamp(0.0, 1.0),
            overlay_opacity: (progress * HERO_OVERLAY_MAX_OPACITY).clamp(0.0, 1.0),
        }
    }

    /// Hero content is hidden once it has fully faded out.
    #[inline]
    pub fn content_visible(&self) -> bool {
        self.content_opacity > 0.0
    }

    /// The scroll indicator stops taking clicks once fully faded.
    #[inline]
    pub fn indicator_interactive(&self) -> bool {
        self.indicator_opacity > 0.0
    }

    /// Whether `next` differs enough from the last written content opacity.
    #[inline]
    pub fn content_changed(previous: f32, next: f32) -> bool {
        (previous - next).abs() > HERO_OPACITY_EPSILON
    }
}
