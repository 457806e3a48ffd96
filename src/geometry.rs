pub mod rect;
pub mod room_coords;
