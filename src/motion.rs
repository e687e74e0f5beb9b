//! Scroll-timeline math for the hero parallax and the one-shot reveals.
//!
//! Everything in here is a pure function of geometry so it stays
//! independent of the rendering layer and can be sampled at whatever
//! cadence the browser delivers scroll events.

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalized position of `pos` inside `[start, end]`, clamped to [0, 1].
/// A degenerate span (`end <= start`) steps from 0 to 1 at `start`.
pub fn progress(pos: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if pos >= start { 1.0 } else { 0.0 };
    }
    ((pos - start) / (end - start)).clamp(0.0, 1.0)
}

/// Progress of a tracked section given its viewport-relative geometry:
/// 0 when the section top reaches the viewport top, 1 when the section
/// bottom reaches the viewport bottom. `top` is the bounding-rect top,
/// so it goes negative as the user scrolls past the section.
pub fn section_progress(top: f64, height: f64, viewport: f64) -> f64 {
    progress(-top, 0.0, height - viewport)
}

/// One frame of the hero timeline: every channel is a linear function
/// of the same progress ratio, with per-layer endpoints chosen so the
/// text layer outruns the foreground, which outruns the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    /// Overlay mask radius, percent. Closes from 100 to 0.
    pub clip_radius: f64,
    /// Background layer offset, percent. Slow parallax, 0 to 50.
    pub background_offset: f64,
    /// Foreground image offset, percent. Medium parallax, 0 to 30.
    pub foreground_offset: f64,
    /// Text layer offset, percent. Fast parallax, 0 to 100.
    pub text_offset: f64,
}

pub fn hero_frame(p: f64) -> HeroFrame {
    let p = p.clamp(0.0, 1.0);
    HeroFrame {
        clip_radius: lerp(100.0, 0.0, p),
        background_offset: lerp(0.0, 50.0, p),
        foreground_offset: lerp(0.0, 30.0, p),
        text_offset: lerp(0.0, 100.0, p),
    }
}

impl HeroFrame {
    pub fn clip_path(&self) -> String {
        format!("circle({}% at 50% 50%)", self.clip_radius)
    }

    pub fn background_transform(&self) -> String {
        translate_y(self.background_offset)
    }

    pub fn foreground_transform(&self) -> String {
        translate_y(self.foreground_offset)
    }

    pub fn text_transform(&self) -> String {
        translate_y(self.text_offset)
    }
}

fn translate_y(percent: f64) -> String {
    format!("translateY({}%)", percent)
}

/// Reveal lifecycle of a tracked element. `Revealed` is terminal: no
/// later scroll position or intersection report moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealPhase {
    pub fn on_intersection(self, intersecting: bool) -> Self {
        if intersecting {
            RevealPhase::Revealed
        } else {
            self
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealPhase::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_unit_interval() {
        assert_eq!(progress(-10.0, 0.0, 100.0), 0.0);
        assert_eq!(progress(50.0, 0.0, 100.0), 0.5);
        assert_eq!(progress(250.0, 0.0, 100.0), 1.0);
    }

    #[test]
    fn degenerate_span_steps_at_start() {
        assert_eq!(progress(-0.1, 0.0, 0.0), 0.0);
        assert_eq!(progress(0.0, 0.0, 0.0), 1.0);
        assert_eq!(progress(5.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn section_progress_tracks_scroll_through() {
        // A 2000px section in a 800px viewport spans 1200px of scroll.
        assert_eq!(section_progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(section_progress(-600.0, 2000.0, 800.0), 0.5);
        assert_eq!(section_progress(-1200.0, 2000.0, 800.0), 1.0);
        // Section shorter than the viewport: step at the top edge.
        assert_eq!(section_progress(10.0, 400.0, 800.0), 0.0);
        assert_eq!(section_progress(0.0, 400.0, 800.0), 1.0);
    }

    #[test]
    fn clip_radius_is_linear_and_non_increasing() {
        let mut prev = f64::INFINITY;
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            let frame = hero_frame(p);
            assert!((frame.clip_radius - (100.0 - 100.0 * p)).abs() < 1e-9);
            assert!(frame.clip_radius <= prev);
            prev = frame.clip_radius;
        }
    }

    #[test]
    fn parallax_offsets_are_linear_in_progress() {
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            let frame = hero_frame(p);
            assert!((frame.background_offset - 50.0 * p).abs() < 1e-9);
            assert!((frame.foreground_offset - 30.0 * p).abs() < 1e-9);
            assert!((frame.text_offset - 100.0 * p).abs() < 1e-9);
        }
    }

    #[test]
    fn hero_frame_hits_literal_endpoints() {
        let start = hero_frame(0.0);
        assert_eq!(start.clip_radius, 100.0);
        assert_eq!(start.background_offset, 0.0);
        assert_eq!(start.foreground_offset, 0.0);
        assert_eq!(start.text_offset, 0.0);

        let end = hero_frame(1.0);
        assert_eq!(end.clip_radius, 0.0);
        assert_eq!(end.background_offset, 50.0);
        assert_eq!(end.foreground_offset, 30.0);
        assert_eq!(end.text_offset, 100.0);
    }

    #[test]
    fn hero_frame_clamps_out_of_range_progress() {
        assert_eq!(hero_frame(-0.5), hero_frame(0.0));
        assert_eq!(hero_frame(1.5), hero_frame(1.0));
    }

    #[test]
    fn css_helpers_format_channels() {
        let frame = hero_frame(0.0);
        assert_eq!(frame.clip_path(), "circle(100% at 50% 50%)");
        assert_eq!(frame.background_transform(), "translateY(0%)");

        let frame = hero_frame(1.0);
        assert_eq!(frame.clip_path(), "circle(0% at 50% 50%)");
        assert_eq!(frame.text_transform(), "translateY(100%)");
    }

    #[test]
    fn reveal_is_one_shot() {
        let phase = RevealPhase::default();
        assert_eq!(phase, RevealPhase::Unrevealed);
        assert_eq!(phase.on_intersection(false), RevealPhase::Unrevealed);

        let revealed = phase.on_intersection(true);
        assert!(revealed.is_revealed());
        // Scrolling back out never reverts a revealed element.
        assert_eq!(revealed.on_intersection(false), RevealPhase::Revealed);
        assert_eq!(revealed.on_intersection(true), RevealPhase::Revealed);
    }
}
