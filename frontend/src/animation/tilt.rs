/// 3D tilt following the pointer across a card or image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `rel_x`/`rel_y` are the pointer position inside the box in `[0, 1]`.
    /// The box leans away from the pointer by at most `max_deg / 2` per axis.
    pub fn from_relative(rel_x: f64, rel_y: f64, max_deg: f64) -> Tilt {
        let rel_x = rel_x.clamp(0.0, 1.0);
        let rel_y = rel_y.clamp(0.0, 1.0);
        Tilt {
            rotate_x: (rel_y - 0.5) * max_deg,
            rotate_y: (rel_x - 0.5) * -max_deg,
        }
    }

    /// Pointer in client coordinates against the element's bounding box.
    pub fn from_pointer(
        client_x: f64,
        client_y: f64,
        (left, top, width, height): (f64, f64, f64, f64),
        max_deg: f64,
    ) -> Tilt {
        if width <= 0.0 || height <= 0.0 {
            return Tilt::default();
        }
        Tilt::from_relative((client_x - left) / width, (client_y - top) / height, max_deg)
    }

    pub fn is_flat(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0
    }

    pub fn to_css(&self, perspective_px: u32, scale: f64) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({}, {}, {})",
            perspective_px, self.rotate_x, self.rotate_y, scale, scale, scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_is_flat() {
        let tilt = Tilt::from_pointer(150.0, 100.0, (100.0, 50.0, 100.0, 100.0), 10.0);
        assert!(tilt.is_flat());
    }

    #[test]
    fn corners_tilt_by_half_the_range() {
        let tilt = Tilt::from_relative(1.0, 0.0, 20.0);
        assert_eq!(tilt.rotate_x, -10.0);
        assert_eq!(tilt.rotate_y, -10.0);

        // Pointer outside the box is clamped to its edge.
        assert_eq!(Tilt::from_relative(4.0, -2.0, 20.0), tilt);
    }

    #[test]
    fn degenerate_box_does_not_tilt() {
        assert!(Tilt::from_pointer(10.0, 10.0, (0.0, 0.0, 0.0, 50.0), 10.0).is_flat());
    }

    #[test]
    fn tilt_depends_on_the_measured_box() {
        // A 300x200 card far down a 5000px page, pointer at its top-left corner.
        let card = (100.0, 2400.0, 300.0, 200.0);
        let page = (0.0, 0.0, 1280.0, 5000.0);
        let (x, y) = (100.0, 2400.0);

        let on_card = Tilt::from_pointer(x, y, card, 5.0);
        assert_eq!(on_card, Tilt { rotate_x: -2.5, rotate_y: 2.5 });

        let on_page = Tilt::from_pointer(x, y, page, 5.0);
        assert!(on_page.rotate_x.abs() < 0.5);
        assert_ne!(on_card, on_page);
    }

    #[test]
    fn renders_transform() {
        let tilt = Tilt { rotate_x: 2.5, rotate_y: -1.25 };
        assert_eq!(
            tilt.to_css(700, 0.95),
            "perspective(700px) rotateX(2.50deg) rotateY(-1.25deg) scale3d(0.95, 0.95, 0.95)"
        );
    }
}
