pub mod freshness;
pub mod resources;
pub mod room_info;
