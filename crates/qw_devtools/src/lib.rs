pub mod hint_overlay;

pub use hint_overlay::{HintOverlay, OverlayActions, OverlayStats};
