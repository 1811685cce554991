pub mod display_mode;
pub mod input;
pub mod time;

pub use display_mode::{DisplayMode, FilterKind, QuadVariant, SamplingParams, WrapKind};
pub use input::{InputState, Key};
pub use time::FrameClock;
