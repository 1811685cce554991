//! The display-mode cycle at the heart of the demo.
//!
//! Each mode picks a texture filter/wrap combination and one of two quad meshes.
//! Hitting Space walks the cycle: Nearest -> Linear -> Repeat -> RepeatMirror ->
//! ClampToEdge -> Mixed -> back to Nearest. Everything here is plain data so the
//! render crate can translate it to GPU sampler state without this crate ever
//! touching wgpu.

/// Texture sampling interpolation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    #[default]
    Nearest,
    Linear,
}

/// Behavior for texture coordinates outside [0, 1].
/// `ClampToEdge` is the default a fresh sampler gets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapKind {
    Repeat,
    MirroredRepeat,
    #[default]
    ClampToEdge,
}

/// Full sampler state derived from a [`DisplayMode`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplingParams {
    pub min_filter: FilterKind,
    pub mag_filter: FilterKind,
    pub wrap_s: WrapKind,
    pub wrap_t: WrapKind,
}

/// Which of the two quad meshes a mode is drawn with.
///
/// `Small` spans tex coords [0,1]x[0,1]; `Tiled` spans [0,4]x[0,2] so the
/// wrap modes have out-of-range coordinates to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadVariant {
    Small,
    Tiled,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Nearest,
    Linear,
    Repeat,
    RepeatMirror,
    ClampToEdge,
    Mixed,
}

impl DisplayMode {
    /// All modes in cycle order.
    pub const ALL: &'static [DisplayMode] = &[
        DisplayMode::Nearest,
        DisplayMode::Linear,
        DisplayMode::Repeat,
        DisplayMode::RepeatMirror,
        DisplayMode::ClampToEdge,
        DisplayMode::Mixed,
    ];

    /// Short human-readable label for overlay display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nearest => "Nearest",
            Self::Linear => "Linear",
            Self::Repeat => "Repeat",
            Self::RepeatMirror => "Repeat (mirrored)",
            Self::ClampToEdge => "Clamp to edge",
            Self::Mixed => "Mixed (clamp S / repeat T)",
        }
    }

    /// Cycle to the next mode (wraps around).
    pub fn next(self) -> Self {
        match self {
            Self::Nearest => Self::Linear,
            Self::Linear => Self::Repeat,
            Self::Repeat => Self::RepeatMirror,
            Self::RepeatMirror => Self::ClampToEdge,
            Self::ClampToEdge => Self::Mixed,
            Self::Mixed => Self::Nearest,
        }
    }

    /// Position of this mode within [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Nearest => 0,
            Self::Linear => 1,
            Self::Repeat => 2,
            Self::RepeatMirror => 3,
            Self::ClampToEdge => 4,
            Self::Mixed => 5,
        }
    }

    /// Sampler state for this mode. Total and deterministic.
    ///
    /// Filter-only modes leave the wrap at the sampler default (clamp to edge);
    /// the wrap modes force nearest filtering so the tile seams stay crisp.
    pub fn sampling_params(self) -> SamplingParams {
        let (min_filter, mag_filter) = match self {
            Self::Linear => (FilterKind::Linear, FilterKind::Linear),
            _ => (FilterKind::Nearest, FilterKind::Nearest),
        };
        let (wrap_s, wrap_t) = match self {
            Self::Nearest | Self::Linear => (WrapKind::default(), WrapKind::default()),
            Self::Repeat => (WrapKind::Repeat, WrapKind::Repeat),
            Self::RepeatMirror => (WrapKind::MirroredRepeat, WrapKind::MirroredRepeat),
            Self::ClampToEdge => (WrapKind::ClampToEdge, WrapKind::ClampToEdge),
            Self::Mixed => (WrapKind::ClampToEdge, WrapKind::Repeat),
        };
        SamplingParams {
            min_filter,
            mag_filter,
            wrap_s,
            wrap_t,
        }
    }

    /// Which quad mesh this mode renders with.
    pub fn quad_variant(self) -> QuadVariant {
        match self {
            Self::Nearest | Self::Linear => QuadVariant::Small,
            _ => QuadVariant::Tiled,
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_nearest() {
        assert_eq!(DisplayMode::default(), DisplayMode::Nearest);
    }

    #[test]
    fn next_visits_every_mode_in_order() {
        let mut mode = DisplayMode::default();
        for &expected in DisplayMode::ALL {
            assert_eq!(mode, expected);
            mode = mode.next();
        }
        // Six advances bring us back to the start.
        assert_eq!(mode, DisplayMode::Nearest);
    }

    #[test]
    fn cycle_closes_from_any_starting_mode() {
        for &start in DisplayMode::ALL {
            let mut mode = start;
            for _ in 0..DisplayMode::ALL.len() {
                mode = mode.next();
            }
            assert_eq!(mode, start);
        }
    }

    #[test]
    fn first_two_advances_are_linear_then_repeat() {
        let mode = DisplayMode::default();
        assert_eq!(mode.next(), DisplayMode::Linear);
        assert_eq!(mode.next().next(), DisplayMode::Repeat);
    }

    #[test]
    fn sampling_params_match_mode_table() {
        use DisplayMode::*;
        use FilterKind::{Linear as L, Nearest as N};
        use WrapKind::{ClampToEdge as C, MirroredRepeat as M, Repeat as R};

        let cases = [
            (Nearest, N, N, C, C),
            (Linear, L, L, C, C),
            (Repeat, N, N, R, R),
            (RepeatMirror, N, N, M, M),
            (ClampToEdge, N, N, C, C),
            (Mixed, N, N, C, R),
        ];
        for (mode, min, mag, s, t) in cases {
            let p = mode.sampling_params();
            assert_eq!(p.min_filter, min, "{mode}: min filter");
            assert_eq!(p.mag_filter, mag, "{mode}: mag filter");
            assert_eq!(p.wrap_s, s, "{mode}: wrap s");
            assert_eq!(p.wrap_t, t, "{mode}: wrap t");
        }
    }

    #[test]
    fn filter_only_modes_use_default_wrap() {
        let p = DisplayMode::Nearest.sampling_params();
        assert_eq!(p.wrap_s, WrapKind::default());
        assert_eq!(p.wrap_t, WrapKind::default());
        let p = DisplayMode::Linear.sampling_params();
        assert_eq!(p.wrap_s, WrapKind::default());
        assert_eq!(p.wrap_t, WrapKind::default());
    }

    #[test]
    fn quad_variant_is_small_only_for_filter_modes() {
        assert_eq!(DisplayMode::Nearest.quad_variant(), QuadVariant::Small);
        assert_eq!(DisplayMode::Linear.quad_variant(), QuadVariant::Small);
        assert_eq!(DisplayMode::Repeat.quad_variant(), QuadVariant::Tiled);
        assert_eq!(DisplayMode::RepeatMirror.quad_variant(), QuadVariant::Tiled);
        assert_eq!(DisplayMode::ClampToEdge.quad_variant(), QuadVariant::Tiled);
        assert_eq!(DisplayMode::Mixed.quad_variant(), QuadVariant::Tiled);
    }

    #[test]
    fn queries_are_pure() {
        for &mode in DisplayMode::ALL {
            assert_eq!(mode.sampling_params(), mode.sampling_params());
            assert_eq!(mode.quad_variant(), mode.quad_variant());
            assert_eq!(mode.next(), mode.next());
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, &mode) in DisplayMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn display_matches_label() {
        for &mode in DisplayMode::ALL {
            assert_eq!(format!("{mode}"), mode.label());
        }
    }
}
