use derive_more::Constructor;
use rustc_hash::FxHashMap;
use screeps::{ExitDirection, LineDrawStyle, LineStyle};
use crate::visualization::canvas::MapCanvas;

/// Exits of a room in each of the four directions.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Constructor)]
pub struct RoomExits {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl RoomExits {
    pub fn all() -> Self {
        RoomExits::new(true, true, true, true)
    }

    pub fn has_exit(self, direction: ExitDirection) -> bool {
        match direction {
            ExitDirection::Top => self.top,
            ExitDirection::Right => self.right,
            ExitDirection::Bottom => self.bottom,
            ExitDirection::Left => self.left,
        }
    }

    pub fn with_exit(mut self, direction: ExitDirection) -> Self {
        match direction {
            ExitDirection::Top => self.top = true,
            ExitDirection::Right => self.right = true,
            ExitDirection::Bottom => self.bottom = true,
            ExitDirection::Left => self.left = true,
        }
        self
    }
}

/// Source of information which rooms are connected.
pub trait ExitTopology {
    /// Exits of the given room or `None` if the room is not known, e.g., outside of the world.
    fn describe_exits(&self, room_name: &str) -> Option<RoomExits>;
}

impl ExitTopology for FxHashMap<String, RoomExits> {
    fn describe_exits(&self, room_name: &str) -> Option<RoomExits> {
        self.get(room_name).copied()
    }
}

/// Draws dashed borders on the edges of a room where there are no exits to the neighbouring room.
/// Edges shared with other rooms in the map are only drawn from one side, so the left and top ones are only drawn
/// in the first column and row respectively.
#[allow(clippy::too_many_arguments)]
pub fn draw_blocked_exits<C>(
    canvas: &C,
    exits: RoomExits,
    x: f32,
    y: f32,
    size: f32,
    border_width: f32,
    is_first_row: bool,
    is_first_col: bool,
) where
    C: MapCanvas + ?Sized,
{
    let half = size / 2.0;
    let style = || {
        Some(
            LineStyle::default()
                .color("black")
                .width(border_width)
                .opacity(1.0)
                .line_style(LineDrawStyle::Dashed),
        )
    };

    if !exits.has_exit(ExitDirection::Right) {
        canvas.line((x + half, y - half), (x + half, y + half), style());
    }
    if !exits.has_exit(ExitDirection::Bottom) {
        canvas.line((x - half, y + half), (x + half, y + half), style());
    }
    if is_first_col && !exits.has_exit(ExitDirection::Left) {
        canvas.line((x - half, y - half), (x - half, y + half), style());
    }
    if is_first_row && !exits.has_exit(ExitDirection::Top) {
        canvas.line((x - half, y - half), (x + half, y - half), style());
    }
}
