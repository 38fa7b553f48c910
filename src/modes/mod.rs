pub mod play;

pub use play::{LoopPhase, PlayMode};
