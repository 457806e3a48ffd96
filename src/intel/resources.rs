use std::fmt::{Display, Formatter};
use enum_iterator::Sequence;
use crate::intel::room_info::RoomInfo;

/// Resource shown as an icon in the intel map.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Sequence)]
pub enum MapResource {
    Energy,
    Hydrogen,
    Oxygen,
    Utrium,
    Keanium,
    Lemergium,
    Zynthium,
    Catalyst,
    /// Placeholder for minerals of unknown type.
    Unknown,
}

impl MapResource {
    /// Resource type identifier as used by the game, or `?` for the placeholder.
    pub fn id(self) -> &'static str {
        match self {
            MapResource::Energy => "energy",
            MapResource::Hydrogen => "H",
            MapResource::Oxygen => "O",
            MapResource::Utrium => "U",
            MapResource::Keanium => "K",
            MapResource::Lemergium => "L",
            MapResource::Zynthium => "Z",
            MapResource::Catalyst => "X",
            MapResource::Unknown => "?",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MapResource::Energy => "#FFE56D",
            MapResource::Hydrogen | MapResource::Oxygen => "#4C4C4C",
            MapResource::Utrium => "#006181",
            MapResource::Keanium => "#371383",
            MapResource::Lemergium => "#236144",
            MapResource::Zynthium => "#5D4C2E",
            MapResource::Catalyst => "#592121",
            MapResource::Unknown => "#000",
        }
    }

    /// The mineral with given resource type identifier. Energy and unknown identifiers are shown as the placeholder.
    pub fn from_mineral(mineral: &str) -> Self {
        match mineral {
            "H" => MapResource::Hydrogen,
            "O" => MapResource::Oxygen,
            "U" => MapResource::Utrium,
            "K" => MapResource::Keanium,
            "L" => MapResource::Lemergium,
            "Z" => MapResource::Zynthium,
            "X" => MapResource::Catalyst,
            _ => MapResource::Unknown,
        }
    }
}

impl Display for MapResource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Number of resource icons that fit in a row of a room.
pub const MAX_RESOURCE_ICONS: usize = 4;

/// Resources to show for a room, left to right: the mineral first, then a single energy per source.
/// At most `MAX_RESOURCE_ICONS` are returned.
pub fn room_resources(info: &RoomInfo) -> Vec<MapResource> {
    let mut resources = Vec::with_capacity(MAX_RESOURCE_ICONS);
    if let Some(mineral) = info.mineral_type() {
        resources.push(MapResource::from_mineral(mineral));
    }
    let sources = info.sources.unwrap_or(0) as usize;
    resources.extend(std::iter::repeat(MapResource::Energy).take(sources.min(MAX_RESOURCE_ICONS - resources.len())));
    resources
}

#[cfg(test)]
mod tests {
    use enum_iterator::all;
    use crate::intel::resources::{room_resources, MapResource, MAX_RESOURCE_ICONS};
    use crate::intel::room_info::RoomInfo;

    #[test]
    fn test_from_mineral() {
        for resource in all::<MapResource>() {
            if resource != MapResource::Energy {
                assert_eq!(MapResource::from_mineral(resource.id()), resource);
            }
        }
        assert_eq!(MapResource::from_mineral("energy"), MapResource::Unknown);
        assert_eq!(MapResource::from_mineral("ghodium"), MapResource::Unknown);
        assert_eq!(MapResource::from_mineral(""), MapResource::Unknown);
    }

    #[test]
    fn test_colors() {
        for resource in all::<MapResource>() {
            assert!(resource.color().starts_with('#'));
        }
        assert_eq!(MapResource::Energy.color(), "#FFE56D");
        assert_eq!(MapResource::Unknown.to_string(), "?");
    }

    #[test]
    fn test_room_resources() {
        let info = RoomInfo {
            sources: Some(2),
            mineral: Some("K".to_owned()),
            ..RoomInfo::default()
        };
        assert_eq!(
            room_resources(&info),
            vec![MapResource::Keanium, MapResource::Energy, MapResource::Energy]
        );

        let invalid_mineral = RoomInfo {
            mineral: Some("energy".to_owned()),
            ..RoomInfo::default()
        };
        assert_eq!(room_resources(&invalid_mineral), vec![MapResource::Unknown]);

        assert!(room_resources(&RoomInfo::default()).is_empty());
    }

    #[test]
    fn test_room_resources_fit_in_a_row() {
        let info = RoomInfo {
            sources: Some(4_000_000_000),
            mineral: Some("O".to_owned()),
            ..RoomInfo::default()
        };
        let resources = room_resources(&info);
        assert_eq!(resources.len(), MAX_RESOURCE_ICONS);
        assert_eq!(resources[0], MapResource::Oxygen);

        let info = RoomInfo {
            sources: Some(u32::MAX),
            ..RoomInfo::default()
        };
        assert_eq!(room_resources(&info), vec![MapResource::Energy; MAX_RESOURCE_ICONS]);
    }
}
