pub mod game_timer;
pub mod header;
pub mod level_header;
pub mod progress_bar;
pub mod toast;
pub mod ui;
