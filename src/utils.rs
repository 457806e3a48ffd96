pub mod game_tick;
pub mod log_err;
