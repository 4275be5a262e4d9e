pub mod avatar_step;
pub mod pitch_step;
