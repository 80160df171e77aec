use super::easing::lerp;

/// Per-element offset for a transition applied across a list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub each_secs: f64,
}

impl Stagger {
    pub fn delay(&self, index: usize) -> f64 {
        index as f64 * self.each_secs
    }

    /// Delay when the list is played backwards: last element moves first.
    pub fn delay_reversed(&self, index: usize, count: usize) -> f64 {
        self.delay(count.saturating_sub(index + 1))
    }
}

/// A box that grows from its resting size to fill the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipFrame {
    pub width_vw: f64,
    pub height_vh: f64,
    pub radius_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipTween {
    pub from: ClipFrame,
    pub to: ClipFrame,
}

impl ClipTween {
    pub fn frame_at(&self, t: f64) -> ClipFrame {
        ClipFrame {
            width_vw: lerp(self.from.width_vw, self.to.width_vw, t),
            height_vh: lerp(self.from.height_vh, self.to.height_vh, t),
            radius_px: lerp(self.from.radius_px, self.to.radius_px, t),
        }
    }

    pub fn css_at(&self, t: f64) -> String {
        let frame = self.frame_at(t);
        format!(
            "width: {:.3}vw; height: {:.3}vh; border-radius: {:.3}px;",
            frame.width_vw, frame.height_vh, frame.radius_px
        )
    }
}

/// Four-point `clip-path` polygon in percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon(pub [(f64, f64); 4]);

impl Polygon {
    pub const FULL: Polygon = Polygon([(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);

    pub fn lerp(&self, to: &Polygon, t: f64) -> Polygon {
        let mut points = self.0;
        for (point, target) in points.iter_mut().zip(to.0.iter()) {
            point.0 = lerp(point.0, target.0, t);
            point.1 = lerp(point.1, target.1, t);
        }
        Polygon(points)
    }

    pub fn to_css(&self) -> String {
        let points: Vec<String> = self
            .0
            .iter()
            .map(|(x, y)| format!("{}% {}%", round(*x), round(*y)))
            .collect();
        format!("polygon({})", points.join(", "))
    }
}

/// `border-radius` corners in percentages, clockwise from top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners(pub [f64; 4]);

impl Corners {
    pub const SQUARE: Corners = Corners([0.0; 4]);

    pub fn lerp(&self, to: &Corners, t: f64) -> Corners {
        let mut corners = self.0;
        for (corner, target) in corners.iter_mut().zip(to.0.iter()) {
            *corner = lerp(*corner, *target, t);
        }
        Corners(corners)
    }

    pub fn to_css(&self) -> String {
        let corners: Vec<String> = self.0.iter().map(|c| format!("{}%", round(*c))).collect();
        corners.join(" ")
    }
}

fn round(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Smooths scroll-driven progress so it catches up over `lag_secs`
/// instead of jumping with every scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    lag_secs: f64,
    current: f64,
    target: f64,
}

const SETTLE_EPSILON: f64 = 1e-3;

impl Scrub {
    pub fn new(lag_secs: f64) -> Self {
        Scrub { lag_secs, current: 0.0, target: 0.0 }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.clamp(0.0, 1.0);
        if self.lag_secs <= 0.0 {
            self.current = self.target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn advance(&mut self, dt_secs: f64) {
        if self.lag_secs <= 0.0 {
            self.current = self.target;
            return;
        }
        // Three time constants per lag: ~95% caught up after `lag_secs`.
        let tau = self.lag_secs / 3.0;
        self.current += (self.target - self.current) * (1.0 - (-dt_secs / tau).exp());
        if (self.target - self.current).abs() < SETTLE_EPSILON {
            self.current = self.target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_offsets_each_word() {
        let stagger = Stagger { each_secs: 0.02 };
        assert_eq!(stagger.delay(0), 0.0);
        assert!((stagger.delay(5) - 0.1).abs() < 1e-12);
        assert_eq!(stagger.delay_reversed(4, 5), 0.0);
        assert!((stagger.delay_reversed(0, 5) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn clip_tween_reaches_full_viewport() {
        let tween = ClipTween {
            from: ClipFrame { width_vw: 30.0, height_vh: 60.0, radius_px: 24.0 },
            to: ClipFrame { width_vw: 100.0, height_vh: 100.0, radius_px: 0.0 },
        };
        assert_eq!(tween.frame_at(0.0), tween.from);
        assert_eq!(tween.frame_at(1.0), tween.to);
        assert_eq!(
            tween.css_at(1.0),
            "width: 100.000vw; height: 100.000vh; border-radius: 0.000px;"
        );
    }

    #[test]
    fn polygon_interpolates_pointwise() {
        let target = Polygon([(14.0, 0.0), (72.0, 0.0), (88.0, 90.0), (0.0, 95.0)]);
        assert_eq!(Polygon::FULL.lerp(&target, 1.0), target);
        assert_eq!(
            Polygon::FULL.lerp(&target, 0.5).to_css(),
            "polygon(7% 0%, 86% 0%, 94% 95%, 0% 97.5%)"
        );
        assert_eq!(
            Corners::SQUARE.lerp(&Corners([0.0, 0.0, 40.0, 10.0]), 0.5).to_css(),
            "0% 0% 20% 5%"
        );
    }

    #[test]
    fn scrub_without_lag_tracks_target() {
        let mut scrub = Scrub::new(0.0);
        scrub.set_target(0.4);
        assert_eq!(scrub.current(), 0.4);
        assert!(scrub.is_settled());
    }

    #[test]
    fn scrub_with_lag_converges_and_settles() {
        let mut scrub = Scrub::new(0.5);
        scrub.set_target(1.0);
        scrub.advance(0.016);
        let first = scrub.current();
        assert!(first > 0.0 && first < 1.0);

        for _ in 0..200 {
            scrub.advance(0.016);
        }
        assert!(scrub.is_settled());
        assert_eq!(scrub.current(), 1.0);
    }

    #[test]
    fn scrub_clamps_target() {
        let mut scrub = Scrub::new(0.0);
        scrub.set_target(7.0);
        assert_eq!(scrub.current(), 1.0);
    }
}
