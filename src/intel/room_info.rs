use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer};
use serde_with::{serde_as, DefaultOnError};
use crate::errors::IntelMapError;
use crate::intel::freshness::intel_freshness;

/// Intel about rooms, indexed by room names.
/// A room may be present with no info (e.g., `null` or a value that is not an object), in which case it is
/// unknown, but it still counts as a room of the map.
#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct IntelMap {
    #[serde_as(as = "FxHashMap<_, DefaultOnError>")]
    rooms: FxHashMap<String, Option<RoomInfo>>,
}

impl IntelMap {
    /// Reads the intel from any serde source. Fails if the intel is missing or is not a map.
    pub fn parse<'de, D>(rooms_info: D) -> Result<Self, IntelMapError>
    where
        D: Deserializer<'de>,
    {
        IntelMap::deserialize(rooms_info).map_err(|e| IntelMapError::InvalidRoomsInfo(e.to_string()))
    }

    pub fn insert(&mut self, room_name: String, info: Option<RoomInfo>) {
        self.rooms.insert(room_name, info);
    }

    /// Names of all rooms in the map, including the ones without info.
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    pub fn get(&self, room_name: &str) -> Option<&RoomInfo> {
        self.rooms.get(room_name).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Information about a room, collected using scouts or observers.
/// All fields are optional. A field with a value of unexpected type is treated as missing.
#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomInfo {
    /// The tick this info was last updated.
    #[serde_as(as = "DefaultOnError")]
    pub last_visit: Option<u32>,
    /// Number of energy sources in the room.
    #[serde_as(as = "DefaultOnError")]
    pub sources: Option<u32>,
    /// Type of the mineral in the room, e.g., `"H"`.
    #[serde_as(as = "DefaultOnError")]
    pub mineral: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub keeper_lairs: Option<bool>,
    /// RCL of the room when it was last seen.
    #[serde_as(as = "DefaultOnError")]
    pub rcl: Option<u8>,
    #[serde_as(as = "DefaultOnError")]
    pub reserved: Option<bool>,
    /// The user who owns, reserved or inhabits the room.
    #[serde_as(as = "DefaultOnError")]
    pub username: Option<String>,
    /// Remaining ticks of safe mode at `last_visit`.
    #[serde_as(as = "DefaultOnError")]
    pub safe_mode: Option<u32>,
    /// Remaining ticks of safe mode cooldown at `last_visit`.
    #[serde_as(as = "DefaultOnError")]
    pub safe_mode_cooldown: Option<u32>,
    /// Whether the room is inhabited by another player.
    #[serde_as(as = "DefaultOnError")]
    pub inhabited: Option<bool>,
    /// Whether, besides being inhabited, the room has some defensive capabilities.
    #[serde_as(as = "DefaultOnError")]
    pub defended: Option<bool>,
}

const EMPTY_ROOM_INFO: RoomInfo = RoomInfo {
    last_visit: None,
    sources: None,
    mineral: None,
    keeper_lairs: None,
    rcl: None,
    reserved: None,
    username: None,
    safe_mode: None,
    safe_mode_cooldown: None,
    inhabited: None,
    defended: None,
};

impl RoomInfo {
    /// Freshness of the intel between 0.0 (stale) and 1.0 (fresh).
    /// Info without the last visit tick is considered fresh.
    pub fn freshness(&self, current_tick: u32, last_visit_threshold: u32) -> f32 {
        self.last_visit
            .map_or(1.0, |last_visit| intel_freshness(last_visit, current_tick, last_visit_threshold))
    }

    pub fn safe_mode_on(&self, current_tick: u32) -> bool {
        self.window_active(self.safe_mode, current_tick)
    }

    pub fn safe_mode_cooldown_on(&self, current_tick: u32) -> bool {
        self.window_active(self.safe_mode_cooldown, current_tick)
    }

    /// Whether a window of `duration` ticks starting at the last visit is still ongoing.
    /// Zero values count as missing.
    fn window_active(&self, duration: Option<u32>, current_tick: u32) -> bool {
        match (self.last_visit, duration) {
            (Some(last_visit), Some(duration)) if last_visit > 0 && duration > 0 => {
                last_visit as u64 + duration as u64 > current_tick as u64
            }
            _ => false,
        }
    }

    /// Type of the mineral in the room. Empty strings count as missing.
    pub fn mineral_type(&self) -> Option<&str> {
        self.mineral.as_deref().filter(|mineral| !mineral.is_empty())
    }

    pub fn is_reserved(&self) -> bool {
        self.reserved.unwrap_or(false)
    }

    pub fn has_keeper_lairs(&self) -> bool {
        self.keeper_lairs.unwrap_or(false)
    }

    pub fn is_inhabited(&self) -> bool {
        self.inhabited.unwrap_or(false)
    }

    pub fn is_defended(&self) -> bool {
        self.defended.unwrap_or(false)
    }

    pub fn is_owned_by(&self, username: Option<&str>) -> bool {
        match (self.username.as_deref(), username) {
            (Some(owner), Some(username)) => owner == username,
            _ => false,
        }
    }
}

/// Intel about a single room to be rendered. Rooms missing from the intel map or without info in it are `Unknown`,
/// which is different from `Known` with no information.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RoomIntel<'a> {
    Known(&'a RoomInfo),
    Unknown,
}

impl<'a> RoomIntel<'a> {
    pub fn lookup(rooms_info: &'a IntelMap, room_name: &str) -> Self {
        rooms_info
            .get(room_name)
            .map_or(RoomIntel::Unknown, RoomIntel::Known)
    }

    pub fn is_unknown(self) -> bool {
        self == RoomIntel::Unknown
    }

    /// The info about the room, with all fields missing for `Unknown`.
    pub fn info(self) -> &'a RoomInfo {
        match self {
            RoomIntel::Known(info) => info,
            RoomIntel::Unknown => &EMPTY_ROOM_INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::errors::IntelMapError;
    use crate::intel::room_info::{IntelMap, RoomInfo, RoomIntel};

    fn parse_info(json: &str) -> RoomInfo {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_full() {
        let info = parse_info(
            r#"{
                "lastVisit": 1000,
                "sources": 2,
                "mineral": "H",
                "keeperLairs": false,
                "rcl": 5,
                "reserved": false,
                "username": "Alice",
                "safeMode": 300,
                "safeModeCooldown": 20000,
                "inhabited": true,
                "defended": true
            }"#,
        );
        assert_eq!(info.last_visit, Some(1000));
        assert_eq!(info.sources, Some(2));
        assert_eq!(info.mineral_type(), Some("H"));
        assert_eq!(info.keeper_lairs, Some(false));
        assert_eq!(info.rcl, Some(5));
        assert_eq!(info.username.as_deref(), Some("Alice"));
        assert_eq!(info.safe_mode, Some(300));
        assert_eq!(info.safe_mode_cooldown, Some(20000));
        assert!(info.is_inhabited());
        assert!(info.is_defended());
    }

    #[test]
    fn test_deserialize_permissive() {
        let info = parse_info(r#"{"rcl": "five", "sources": 2, "username": 7, "someOtherField": [1, 2]}"#);
        assert_eq!(info.rcl, None);
        assert_eq!(info.sources, Some(2));
        assert_eq!(info.username, None);

        let empty_mineral = parse_info(r#"{"mineral": ""}"#);
        assert_eq!(empty_mineral.mineral_type(), None);
    }

    #[test]
    fn test_empty_info_is_known() {
        let rooms_info: IntelMap = serde_json::from_str(r#"{"W1N1": {}}"#).unwrap();
        let intel = RoomIntel::lookup(&rooms_info, "W1N1");
        assert_eq!(intel, RoomIntel::Known(&RoomInfo::default()));
        assert!(!intel.is_unknown());
        assert!(RoomIntel::lookup(&rooms_info, "W1N2").is_unknown());
        assert_eq!(RoomIntel::Unknown.info(), &RoomInfo::default());
    }

    #[test]
    fn test_rooms_without_info_are_unknown() {
        let rooms_info: IntelMap =
            serde_json::from_str(r#"{"W5N5": {"rcl": 2}, "W4N5": null, "W3N5": 5, "W2N5": "scouted"}"#).unwrap();
        assert_eq!(rooms_info.len(), 4);
        let mut room_names = rooms_info.room_names().collect::<Vec<_>>();
        room_names.sort();
        assert_eq!(room_names, vec!["W2N5", "W3N5", "W4N5", "W5N5"]);
        assert_eq!(RoomIntel::lookup(&rooms_info, "W5N5").info().rcl, Some(2));
        for room_name in ["W4N5", "W3N5", "W2N5"] {
            assert!(RoomIntel::lookup(&rooms_info, room_name).is_unknown());
        }
    }

    #[test]
    fn test_rooms_info_must_be_a_map() {
        for json in ["null", "5", "\"W5N5\"", "[{}]"] {
            assert!(serde_json::from_str::<IntelMap>(json).is_err());
        }
        let mut rooms_info: IntelMap = serde_json::from_str("{}").unwrap();
        assert!(rooms_info.is_empty());
        rooms_info.insert("W1N1".to_owned(), None);
        assert!(RoomIntel::lookup(&rooms_info, "W1N1").is_unknown());
    }

    #[test]
    fn test_parse_missing_or_invalid() {
        for rooms_info in [Value::Null, json!(5), json!("W1N1"), json!([{"rcl": 1}])] {
            assert!(matches!(IntelMap::parse(rooms_info), Err(IntelMapError::InvalidRoomsInfo(_))));
        }
        let rooms_info = IntelMap::parse(json!({"W1N1": {"rcl": 1}, "W1N2": null})).unwrap();
        assert_eq!(rooms_info.len(), 2);
        assert_eq!(rooms_info.get("W1N1").and_then(|info| info.rcl), Some(1));
        assert_eq!(rooms_info.get("W1N2"), None);
    }

    #[test]
    fn test_safe_mode_windows() {
        let info = parse_info(r#"{"lastVisit": 100, "safeMode": 50, "safeModeCooldown": 200}"#);
        assert!(info.safe_mode_on(149));
        assert!(!info.safe_mode_on(150));
        assert!(info.safe_mode_cooldown_on(250));
        assert!(!info.safe_mode_cooldown_on(300));

        let without_visit = parse_info(r#"{"safeMode": 50}"#);
        assert!(!without_visit.safe_mode_on(0));

        let zero_duration = parse_info(r#"{"lastVisit": 100, "safeMode": 0}"#);
        assert!(!zero_duration.safe_mode_on(50));
    }

    #[test]
    fn test_ownership() {
        let info = parse_info(r#"{"username": "Alice"}"#);
        assert!(info.is_owned_by(Some("Alice")));
        assert!(!info.is_owned_by(Some("Bob")));
        assert!(!info.is_owned_by(None));
        assert!(!RoomInfo::default().is_owned_by(None));
    }
}
