use console::Style;

/// Width of the `+` and `-` runs of a proportional bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bar {
    pub plus: usize,
    pub minus: usize,
}

impl Bar {
    pub fn width(&self) -> usize {
        self.plus + self.minus
    }

    pub fn paint(&self, plus_style: &Style, minus_style: &Style) -> String {
        let mut out = String::new();
        if self.plus > 0 {
            out.push_str(&plus_style.apply_to("+".repeat(self.plus)).to_string());
        }
        if self.minus > 0 {
            out.push_str(&minus_style.apply_to("-".repeat(self.minus)).to_string());
        }
        out
    }
}

/// Fit `additions + deletions` into `max_width` columns.
///
/// Both sides share one scale factor and are rounded independently, so a
/// scaled bar may end up one column off `max_width`. A non-positive width
/// yields an empty bar.
pub fn render_bar(additions: u64, deletions: u64, max_width: i64) -> Bar {
    if max_width <= 0 {
        return Bar::default();
    }

    let total = additions + deletions;
    if total <= max_width as u64 {
        return Bar {
            plus: additions as usize,
            minus: deletions as usize,
        };
    }

    let rate = max_width as f64 / total as f64;
    Bar {
        plus: (additions as f64 * rate).round() as usize,
        minus: (deletions as f64 * rate).round() as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fits_unchanged() {
        assert_eq!(render_bar(3, 4, 10), Bar { plus: 3, minus: 4 });
        assert_eq!(render_bar(6, 4, 10), Bar { plus: 6, minus: 4 });
    }

    #[test]
    fn scales_both_sides_together() {
        assert_eq!(render_bar(100, 50, 30), Bar { plus: 20, minus: 10 });
        assert_eq!(render_bar(1000, 0, 60), Bar { plus: 60, minus: 0 });
    }

    #[test]
    fn independent_rounding_can_overshoot() {
        // 0.5 rounds away from zero on both sides
        let bar = render_bar(1, 1, 1);
        assert_eq!(bar, Bar { plus: 1, minus: 1 });
        assert_eq!(bar.width(), 2);

        let bar = render_bar(3, 3, 3);
        assert_eq!(bar, Bar { plus: 2, minus: 2 });
    }

    #[test]
    fn non_positive_width_is_empty() {
        assert_eq!(render_bar(10, 10, 0), Bar::default());
        assert_eq!(render_bar(10, 10, -12), Bar::default());
        assert_eq!(render_bar(0, 0, -1), Bar::default());
    }

    #[test]
    fn rescaling_a_fitting_bar_is_stable() {
        for (a, d, w) in [(3, 4, 10), (100, 50, 30), (7, 0, 7), (0, 0, 5)] {
            let once = render_bar(a, d, w);
            let twice = render_bar(once.plus as u64, once.minus as u64, w);
            if a + d <= w as u64 {
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn paint_without_color() {
        let plain = Style::new().force_styling(false);
        assert_eq!(Bar { plus: 3, minus: 2 }.paint(&plain, &plain), "+++--");
        assert_eq!(Bar::default().paint(&plain, &plain), "");
    }
}
