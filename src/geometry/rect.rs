use std::cmp::{max, min};
use derive_more::Constructor;
use crate::geometry::room_coords::RoomCoords;

/// Inclusive rectangle of rooms, with `min` being the south-west corner and `max` the north-east one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Constructor)]
pub struct CoordsRect {
    pub min: RoomCoords,
    pub max: RoomCoords,
}

impl CoordsRect {
    /// A rectangle containing only the given room.
    pub fn single(coords: RoomCoords) -> Self {
        CoordsRect {
            min: coords,
            max: coords,
        }
    }

    /// The smallest rectangle containing all given rooms or `None` if there are none.
    pub fn bounding<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = RoomCoords>,
    {
        coords.into_iter().fold(None, |rect, c| {
            Some(match rect {
                None => CoordsRect::single(c),
                Some(CoordsRect { min: lo, max: hi }) => CoordsRect {
                    min: RoomCoords::new(min(lo.x, c.x), min(lo.y, c.y)),
                    max: RoomCoords::new(max(hi.x, c.x), max(hi.y, c.y)),
                },
            })
        })
    }

    /// Clamps the rectangle to at most `range` rooms from `center` in each axis.
    /// When the rectangle lies entirely on one side of the range in some axis, it collapses to the single row or
    /// column at the limit of the range on that side.
    pub fn clamp_to_range(self, center: RoomCoords, range: u32) -> Self {
        let range = range.min(i32::MAX as u32) as i32;
        let clamp = |value: i32, c: i32| value.clamp(c.saturating_sub(range), c.saturating_add(range));
        CoordsRect {
            min: RoomCoords::new(clamp(self.min.x, center.x), clamp(self.min.y, center.y)),
            max: RoomCoords::new(clamp(self.max.x, center.x), clamp(self.max.y, center.y)),
        }
    }

    pub fn width(self) -> u32 {
        self.max.x.abs_diff(self.min.x) + 1
    }

    pub fn height(self) -> u32 {
        self.max.y.abs_diff(self.min.y) + 1
    }

    pub fn inside(self, coords: RoomCoords) -> bool {
        self.min.x <= coords.x && coords.x <= self.max.x && self.min.y <= coords.y && coords.y <= self.max.y
    }
}
