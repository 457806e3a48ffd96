use screeps::{CircleStyle, LineStyle, RectStyle, RoomVisual, TextStyle};

/// Surface the intel map is drawn on. Coordinates are in room tiles of the room the map is drawn in.
/// The drawing methods take `&self`, same as `RoomVisual`.
pub trait MapCanvas {
    fn rect(&self, x: f32, y: f32, width: f32, height: f32, style: Option<RectStyle>);
    fn line(&self, from: (f32, f32), to: (f32, f32), style: Option<LineStyle>);
    fn circle(&self, x: f32, y: f32, style: Option<CircleStyle>);
    fn text(&self, x: f32, y: f32, text: String, style: Option<TextStyle>);
}

impl MapCanvas for RoomVisual {
    fn rect(&self, x: f32, y: f32, width: f32, height: f32, style: Option<RectStyle>) {
        RoomVisual::rect(self, x, y, width, height, style);
    }

    fn line(&self, from: (f32, f32), to: (f32, f32), style: Option<LineStyle>) {
        RoomVisual::line(self, from, to, style);
    }

    fn circle(&self, x: f32, y: f32, style: Option<CircleStyle>) {
        RoomVisual::circle(self, x, y, style);
    }

    fn text(&self, x: f32, y: f32, text: String, style: Option<TextStyle>) {
        RoomVisual::text(self, x, y, text, style);
    }
}
