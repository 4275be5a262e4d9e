pub mod home;
pub mod level4;
pub mod next_level;
pub mod not_found;
