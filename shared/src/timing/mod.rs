mod beat;
mod flow;
mod pressure;
mod window;

pub use beat::Beat;
pub use flow::{activation_beat, flow_beat};
pub use pressure::{FlowPressure, PressureRelease};
pub use window::{is_valid, unlerp, window_score, DEFAULT_SCORE_LIMIT};
