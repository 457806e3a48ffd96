use log::LevelFilter;
use screeps::CREEP_LIFE_TIME;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Number of ticks after which the intel about a room is considered completely stale.
pub const DEFAULT_LAST_VISIT_THRESHOLD: u32 = 2 * CREEP_LIFE_TIME;
/// Edge length of a single room in the map, in room tiles.
pub const DEFAULT_ROOM_SIZE: f32 = 3.0;
pub const DEFAULT_OPACITY: f32 = 0.4;
/// Max number of rooms displayed on each side of the target room.
pub const DEFAULT_MAX_RANGE: u32 = 7;
pub const DEFAULT_DISPLAY_EXITS: bool = true;
