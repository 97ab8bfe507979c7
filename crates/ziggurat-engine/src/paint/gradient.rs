use super::Color;

/// Blend policy applied between gradient keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendMode {
    /// Colors interpolate linearly between bracketing keys.
    Continuous,
    /// Keys form discrete flat-colored bands.
    Stepped,
}

/// A single gradient control point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientKey {
    pub t: f32,
    pub color: Color,
}

impl GradientKey {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Keyed color gradient over [0, 1].
///
/// Invariant: keys are sorted by ascending `t`. The constructor sorts, so
/// the invariant holds for any input order, and the key list is only exposed
/// as a shared slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    keys: Vec<GradientKey>,
    mode: BlendMode,
}

impl Gradient {
    pub fn new(mut keys: Vec<GradientKey>, mode: BlendMode) -> Self {
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys, mode }
    }

    #[inline]
    pub fn keys(&self) -> &[GradientKey] {
        &self.keys
    }

    #[inline]
    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    /// Color at `time`, clamped to [0, 1].
    ///
    /// Outside the keyed range the nearest key wins. An empty gradient
    /// evaluates to the transparent zero color.
    pub fn evaluate(&self, time: f32) -> Color {
        let Some(first) = self.keys.first() else {
            return Color::transparent();
        };
        let last = self.keys[self.keys.len() - 1];
        let t = time.clamp(0.0, 1.0);

        match self.mode {
            BlendMode::Continuous => {
                if t <= first.t {
                    return first.color;
                }
                if t >= last.t {
                    return last.color;
                }
                // Keys are sorted, so a bracketing pair exists.
                for pair in self.keys.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    if t <= b.t {
                        let span = b.t - a.t;
                        if span <= f32::EPSILON {
                            return b.color;
                        }
                        return a.color.lerp(b.color, (t - a.t) / span);
                    }
                }
                last.color
            }
            BlendMode::Stepped => self
                .keys
                .iter()
                .rev()
                .find(|key| key.t <= t)
                .map(|key| key.color)
                .unwrap_or(first.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_key(mode: BlendMode) -> Gradient {
        Gradient::new(
            vec![
                GradientKey::new(0.0, Color::red()),
                GradientKey::new(1.0, Color::green()),
            ],
            mode,
        )
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn constructor_sorts_keys() {
        let g = Gradient::new(
            vec![
                GradientKey::new(0.9, Color::white()),
                GradientKey::new(0.1, Color::black()),
                GradientKey::new(0.5, Color::red()),
            ],
            BlendMode::Continuous,
        );
        let times: Vec<f32> = g.keys().iter().map(|k| k.t).collect();
        assert_eq!(times, vec![0.1, 0.5, 0.9]);
    }

    // ── continuous ────────────────────────────────────────────────────────

    #[test]
    fn continuous_endpoints_match_first_and_last_key() {
        let g = two_key(BlendMode::Continuous);
        assert_eq!(g.evaluate(0.0), Color::red());
        assert_eq!(g.evaluate(1.0), Color::green());
    }

    #[test]
    fn continuous_interpolates_between_keys() {
        let g = two_key(BlendMode::Continuous);
        assert_eq!(g.evaluate(0.5), Color::red().lerp(Color::green(), 0.5));
    }

    #[test]
    fn continuous_clamps_outside_range() {
        let g = two_key(BlendMode::Continuous);
        assert_eq!(g.evaluate(-2.0), Color::red());
        assert_eq!(g.evaluate(3.0), Color::green());
    }

    #[test]
    fn continuous_clamps_to_nearest_key_inside_unit_range() {
        let g = Gradient::new(
            vec![
                GradientKey::new(0.4, Color::red()),
                GradientKey::new(0.6, Color::green()),
            ],
            BlendMode::Continuous,
        );
        assert_eq!(g.evaluate(0.0), Color::red());
        assert_eq!(g.evaluate(1.0), Color::green());
    }

    #[test]
    fn continuous_coincident_keys_form_a_hard_edge() {
        let g = Gradient::new(
            vec![
                GradientKey::new(0.0, Color::black()),
                GradientKey::new(0.5, Color::red()),
                GradientKey::new(0.5, Color::green()),
                GradientKey::new(1.0, Color::white()),
            ],
            BlendMode::Continuous,
        );
        // The duplicated time is a hard edge: the ramp below it ends on red,
        // the ramp above it starts from green.
        assert_eq!(g.evaluate(0.5), Color::red());
        assert_eq!(g.evaluate(0.75), Color::green().lerp(Color::white(), 0.5));
    }

    #[test]
    fn single_key_is_constant() {
        let g = Gradient::new(vec![GradientKey::new(0.5, Color::white())], BlendMode::Continuous);
        assert_eq!(g.evaluate(0.0), Color::white());
        assert_eq!(g.evaluate(0.5), Color::white());
        assert_eq!(g.evaluate(1.0), Color::white());
    }

    // ── stepped ───────────────────────────────────────────────────────────

    #[test]
    fn stepped_takes_last_key_at_or_before_time() {
        let g = Gradient::new(
            vec![
                GradientKey::new(0.0, Color::red()),
                GradientKey::new(0.5, Color::green()),
            ],
            BlendMode::Stepped,
        );
        assert_eq!(g.evaluate(0.0), Color::red());
        assert_eq!(g.evaluate(0.49), Color::red());
        assert_eq!(g.evaluate(0.5), Color::green());
        assert_eq!(g.evaluate(1.0), Color::green());
    }

    #[test]
    fn stepped_below_first_key_takes_first_key() {
        let g = Gradient::new(
            vec![
                GradientKey::new(0.4, Color::red()),
                GradientKey::new(0.8, Color::green()),
            ],
            BlendMode::Stepped,
        );
        assert_eq!(g.evaluate(0.1), Color::red());
    }

    // ── empty ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_gradient_evaluates_to_transparent() {
        let g = Gradient::new(Vec::new(), BlendMode::Continuous);
        assert_eq!(g.evaluate(0.5), Color::transparent());
        let g = Gradient::new(Vec::new(), BlendMode::Stepped);
        assert_eq!(g.evaluate(0.5), Color::transparent());
    }
}
