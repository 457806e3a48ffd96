use log::{debug, trace};
use screeps::{CircleStyle, LineDrawStyle, RectStyle, TextStyle};
use serde::Deserialize;
use crate::config::{
    DEFAULT_DISPLAY_EXITS,
    DEFAULT_LAST_VISIT_THRESHOLD,
    DEFAULT_MAX_RANGE,
    DEFAULT_OPACITY,
    DEFAULT_ROOM_SIZE,
};
use crate::errors::IntelMapError;
use crate::geometry::rect::CoordsRect;
use crate::geometry::room_coords::RoomCoords;
use crate::intel::freshness::brightness;
use crate::intel::resources::{room_resources, MapResource};
use crate::intel::room_info::{IntelMap, RoomInfo, RoomIntel};
use crate::visualization::canvas::MapCanvas;
use crate::visualization::color::hsv_to_rgb;
use crate::visualization::exits::{draw_blocked_exits, ExitTopology};

const UNKNOWN_ROOM_COLOR: &str = "#181818";
const MAP_BACKGROUND_COLOR: &str = "gray";
const KEEPER_LAIR_COLOR: &str = "#780207";
/// Width of the border between rooms relative to the room size.
const BORDER_WIDTH_RATIO: f32 = 0.07;
const USERNAME_MAX_LEN: usize = 6;

const OWNED_HUE: f32 = 120.0;
const DEFENDED_HUE: f32 = 0.0;
const INHABITED_HUE: f32 = 60.0;
const OTHER_HUE: f32 = 240.0;

/// Options of the intel map that can be read from JS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntelMapConfig {
    /// Number of ticks after which a room's info is considered old and is drawn dark.
    pub last_visit_threshold: u32,
    /// Edge length of each room in the map, in room tiles.
    pub room_size: f32,
    /// Opacity of the map's background.
    pub opacity: f32,
    /// Max number of rooms displayed on each side of the target room.
    pub max_range: u32,
    /// Whether to draw borders where there are no exits between rooms.
    pub display_exits: bool,
}

impl Default for IntelMapConfig {
    fn default() -> Self {
        IntelMapConfig {
            last_visit_threshold: DEFAULT_LAST_VISIT_THRESHOLD,
            room_size: DEFAULT_ROOM_SIZE,
            opacity: DEFAULT_OPACITY,
            max_range: DEFAULT_MAX_RANGE,
            display_exits: DEFAULT_DISPLAY_EXITS,
        }
    }
}

impl IntelMapConfig {
    pub fn validate(&self) -> Result<(), IntelMapError> {
        if !self.room_size.is_finite() || self.room_size <= 0.0 {
            return Err(IntelMapError::InvalidOptions(format!("room size {} is not positive", self.room_size)));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(IntelMapError::InvalidOptions(format!("opacity {} is not between 0 and 1", self.opacity)));
        }
        Ok(())
    }
}

/// Callback drawing extra information about a room. It receives the room name, the canvas, the center of the room
/// in the map and the size of the room in the map.
pub type RoomRenderHook<'a, C> = Box<dyn FnMut(&str, &C, f32, f32, f32) + 'a>;

/// Extension points of the intel map.
/// `render_behind` is called once per room after its background and before anything else of the room is drawn.
/// `render_in_front` is called once per room after everything of the room, including its borders, is drawn.
pub struct RenderHooks<'a, C: ?Sized> {
    pub render_behind: Option<RoomRenderHook<'a, C>>,
    pub render_in_front: Option<RoomRenderHook<'a, C>>,
}

impl<C: ?Sized> Default for RenderHooks<'_, C> {
    fn default() -> Self {
        RenderHooks {
            render_behind: None,
            render_in_front: None,
        }
    }
}

/// The state of the game the map is drawn in.
pub struct MapEnvironment<'a> {
    /// The tick used to compute freshness of intel and whether safe mode is on.
    pub current_tick: u32,
    /// The username of the player running the bot, if known. Rooms owned by them are drawn green.
    pub my_username: Option<&'a str>,
    pub exits: &'a dyn ExitTopology,
}

/// Rooms of the map and where they are drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapLayout {
    pub window: CoordsRect,
    pub room_size: f32,
    pub border_width: f32,
}

impl MapLayout {
    /// Top-left corner of the map.
    const ORIGIN: (f32, f32) = (-0.5, -0.5);

    /// Layout of the map around `target` showing at most `max_range` rooms in each direction from it,
    /// but not beyond the rooms with intel.
    pub fn new(target: RoomCoords, rooms: &[RoomCoords], max_range: u32, room_size: f32) -> Self {
        let window = CoordsRect::bounding(rooms.iter().copied())
            .unwrap_or_else(|| CoordsRect::single(target))
            .clamp_to_range(target, max_range);
        MapLayout {
            window,
            room_size,
            border_width: BORDER_WIDTH_RATIO * room_size,
        }
    }

    pub fn rows(&self) -> u32 {
        self.window.height()
    }

    pub fn cols(&self) -> u32 {
        self.window.width()
    }

    /// Size of a room without its border.
    pub fn inner_size(&self) -> f32 {
        self.room_size - self.border_width
    }

    /// Room drawn in given row and column. Row 0 is at the top, i.e., it is the northernmost one.
    pub fn room_coords(&self, row: u32, col: u32) -> RoomCoords {
        RoomCoords::new(self.window.min.x + col as i32, self.window.max.y - row as i32)
    }

    /// Center of the room drawn in given row and column.
    pub fn room_center(&self, row: u32, col: u32) -> (f32, f32) {
        (
            Self::ORIGIN.0 + (col as f32 + 0.5) * self.room_size,
            Self::ORIGIN.1 + (row as f32 + 0.5) * self.room_size,
        )
    }
}

/// Draws a map of rooms around `target_room` with all the intel provided.
/// Fails without drawing anything if the target room or any room in the intel has an invalid name.
pub fn render_intel_map<C>(
    canvas: &C,
    target_room: &str,
    rooms_info: &IntelMap,
    config: &IntelMapConfig,
    env: &MapEnvironment,
    hooks: &mut RenderHooks<C>,
) -> Result<(), IntelMapError>
where
    C: MapCanvas + ?Sized,
{
    config.validate()?;
    let target = target_room.parse::<RoomCoords>()?;
    let rooms = rooms_info
        .room_names()
        .map(|room_name| room_name.parse::<RoomCoords>())
        .collect::<Result<Vec<_>, _>>()?;

    let layout = MapLayout::new(target, &rooms, config.max_range, config.room_size);
    let rows = layout.rows();
    let cols = layout.cols();
    debug!(
        "Rendering intel map of {}x{} rooms around {} with {} rooms with intel inside.",
        cols,
        rows,
        target_room,
        rooms.iter().filter(|&&coords| layout.window.inside(coords)).count()
    );

    canvas.rect(
        MapLayout::ORIGIN.0,
        MapLayout::ORIGIN.1,
        cols as f32 * layout.room_size,
        rows as f32 * layout.room_size,
        Some(RectStyle::default().fill(MAP_BACKGROUND_COLOR).opacity(config.opacity)),
    );

    let inner_size = layout.inner_size();
    for row in 0..rows {
        for col in 0..cols {
            let room_name = layout.room_coords(row, col).room_name();
            let (x, y) = layout.room_center(row, col);
            let intel = RoomIntel::lookup(rooms_info, &room_name);

            let render_behind = &mut hooks.render_behind;
            draw_room(canvas, intel, x, y, inner_size, config, env, || {
                if let Some(render_behind) = render_behind.as_mut() {
                    render_behind(room_name.as_str(), canvas, x, y, inner_size);
                }
            });

            if config.display_exits {
                match env.exits.describe_exits(&room_name) {
                    Some(exits) => draw_blocked_exits(
                        canvas,
                        exits,
                        x,
                        y,
                        layout.room_size,
                        layout.border_width,
                        row == 0,
                        col == 0,
                    ),
                    None => trace!("No exits known for room {}.", room_name),
                }
            }

            if let Some(render_in_front) = hooks.render_in_front.as_mut() {
                render_in_front(room_name.as_str(), canvas, x, y, inner_size);
            }
        }
    }

    Ok(())
}

/// Color of the background of a room given the brightness derived from the freshness of its intel.
pub fn room_color(intel: RoomIntel, brightness: f32, my_username: Option<&str>) -> String {
    let info = match intel {
        RoomIntel::Known(info) => info,
        RoomIntel::Unknown => return UNKNOWN_ROOM_COLOR.to_owned(),
    };
    let hue = if info.is_owned_by(my_username) {
        OWNED_HUE
    } else if info.is_defended() {
        DEFENDED_HUE
    } else if info.is_inhabited() {
        INHABITED_HUE
    } else {
        OTHER_HUE
    };
    hsv_to_rgb(hue, 1.0, brightness)
}

/// Draws a single room of the map centered at `(x, y)`.
/// `render_behind` is called right after the room's background is drawn.
#[allow(clippy::too_many_arguments)]
pub fn draw_room<C, F>(
    canvas: &C,
    intel: RoomIntel,
    x: f32,
    y: f32,
    size: f32,
    config: &IntelMapConfig,
    env: &MapEnvironment,
    render_behind: F,
) where
    C: MapCanvas + ?Sized,
    F: FnOnce(),
{
    let info = intel.info();
    let unknown = intel.is_unknown();
    let value = brightness(info.freshness(env.current_tick, config.last_visit_threshold));
    let text_color = if value < 0.5 || unknown { "#FFF" } else { "#000" };
    let color = room_color(intel, value, env.my_username);

    canvas.rect(
        x - size / 2.0,
        y - size / 2.0,
        size,
        size,
        Some(RectStyle::default().fill(&color).opacity(config.opacity)),
    );

    render_behind();

    if info.sources.unwrap_or(0) > 0 || info.mineral_type().is_some() {
        draw_resources(canvas, info, x, y, size);
    }

    // Active safe mode decides the style even when the cooldown is on as well.
    let safe_mode_on = info.safe_mode_on(env.current_tick);
    if safe_mode_on || info.safe_mode_cooldown_on(env.current_tick) {
        let rect_size = 0.5 * size;
        let line_style = if safe_mode_on {
            LineDrawStyle::Solid
        } else {
            LineDrawStyle::Dotted
        };
        canvas.rect(
            x - 0.5 * rect_size,
            y - 0.45 * rect_size,
            rect_size,
            rect_size,
            Some(
                RectStyle::default()
                    .fill("transparent")
                    .stroke(text_color)
                    .line_style(line_style),
            ),
        );
    }

    let label_style = || Some(TextStyle::default().font(0.6 * size).color(text_color));
    if info.is_reserved() {
        canvas.text(x, y + 0.25 * size, "R".to_owned(), label_style());
    } else if let Some(rcl) = info.rcl {
        canvas.text(x, y + 0.25 * size, rcl.to_string(), label_style());
    } else if info.has_keeper_lairs() {
        let radius = size / 6.0;
        canvas.circle(
            x,
            y,
            Some(
                CircleStyle::default()
                    .stroke(KEEPER_LAIR_COLOR)
                    .stroke_width(0.9 * radius)
                    .fill("#000")
                    .opacity(1.0)
                    .radius(radius),
            ),
        );
    } else if unknown {
        canvas.text(
            x,
            y + size / 3.0,
            "?".to_owned(),
            Some(TextStyle::default().font(size).color(text_color)),
        );
    }

    if let Some(username) = info.username.as_deref() {
        canvas.text(
            x,
            y + 0.45 * size,
            username.chars().take(USERNAME_MAX_LEN).collect(),
            Some(TextStyle::default().font(size / 4.0).color(text_color)),
        );
    }
}

/// Draws icons of the mineral and energy sources in a row above the center of the room.
fn draw_resources<C>(canvas: &C, info: &RoomInfo, x: f32, y: f32, size: f32)
where
    C: MapCanvas + ?Sized,
{
    let width = size / 4.0;
    for (i, resource) in room_resources(info).into_iter().enumerate() {
        let center_x = x + (2.0 * i as f32 - 3.0) * width / 2.0;
        let center_y = y - 3.0 * width / 2.0;
        canvas.circle(
            center_x,
            center_y,
            Some(
                CircleStyle::default()
                    .stroke("#000")
                    .stroke_width(0.07 * width)
                    .fill(resource.color())
                    .opacity(1.0)
                    .radius(0.45 * width),
            ),
        );
        if resource != MapResource::Energy {
            canvas.text(
                center_x,
                center_y + 0.25 * width,
                resource.id().to_owned(),
                Some(TextStyle::default().font(0.75 * width).color("#FFF").opacity(0.7)),
            );
        }
    }
}
