use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;
use derive_more::Constructor;
use regex::Regex;
use screeps::RoomName;
use crate::errors::IntelMapError;

static ROOM_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([WE])(\d+)([NS])(\d+)$").expect("room name regex is valid"));

/// Room name as a pair of integers, with east and north being non-negative and west and south negative,
/// e.g., `W2N2` is `(-3, 2)` and `E0S0` is `(0, -1)`.
/// Unlike `RoomName`, it is not limited to the size of the world.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Constructor)]
pub struct RoomCoords {
    pub x: i32,
    pub y: i32,
}

impl RoomCoords {
    pub fn room_name(self) -> String {
        self.to_string()
    }
}

impl FromStr for RoomCoords {
    type Err = IntelMapError;

    fn from_str(room_name: &str) -> Result<Self, Self::Err> {
        let invalid = || IntelMapError::InvalidRoomName(room_name.to_owned());
        let caps = ROOM_NAME_REGEX.captures(room_name).ok_or_else(invalid)?;
        let lon = caps[2].parse::<i32>().map_err(|_| invalid())?;
        let lat = caps[4].parse::<i32>().map_err(|_| invalid())?;
        Ok(RoomCoords {
            x: if &caps[1] == "W" { -lon - 1 } else { lon },
            y: if &caps[3] == "S" { -lat - 1 } else { lat },
        })
    }
}

impl Display for RoomCoords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.x < 0 {
            write!(f, "W{}", -(self.x as i64) - 1)?;
        } else {
            write!(f, "E{}", self.x)?;
        }
        if self.y < 0 {
            write!(f, "S{}", -(self.y as i64) - 1)
        } else {
            write!(f, "N{}", self.y)
        }
    }
}

impl From<RoomName> for RoomCoords {
    fn from(room_name: RoomName) -> Self {
        // `RoomName` counts y coordinates southwards, starting with `N0` as -1.
        RoomCoords {
            x: room_name.x_coord(),
            y: -room_name.y_coord() - 1,
        }
    }
}
