use js_sys::{Array, Function, Object, Reflect};
use log::error;
use screeps::{game, ExitDirection, OwnedStructureProperties, RoomName, RoomVisual};
use wasm_bindgen::{JsCast, JsValue};
use crate::errors::IntelMapError;
use crate::intel::room_info::IntelMap;
use crate::log_err;
use crate::utils::game_tick::game_tick;
use crate::visualization::exits::{ExitTopology, RoomExits};
use crate::visualization::intel_map::{
    render_intel_map,
    IntelMapConfig,
    MapEnvironment,
    RenderHooks,
    RoomRenderHook,
};

const RENDER_BEHIND_KEY: &str = "renderBehind";
const RENDER_IN_FRONT_KEY: &str = "renderInFront";

/// Exits between rooms as reported by `Game.map.describeExits`.
pub struct GameMapExits;

impl ExitTopology for GameMapExits {
    fn describe_exits(&self, room_name: &str) -> Option<RoomExits> {
        let exits = match describe_exits_js(room_name) {
            Ok(exits) => exits,
            Err(e) => {
                error!("Failed to describe exits of room {}: {:?}.", room_name, e);
                return None;
            }
        };
        if exits.is_null() || exits.is_undefined() {
            return None;
        }

        let mut result = RoomExits::default();
        for direction in [ExitDirection::Top, ExitDirection::Right, ExitDirection::Bottom, ExitDirection::Left] {
            let exit = Reflect::get(&exits, &JsValue::from_str(exit_key(direction))).ok()?;
            if exit.is_truthy() {
                result = result.with_exit(direction);
            }
        }
        Some(result)
    }
}

/// Key of the exit in the object returned by `Game.map.describeExits`.
fn exit_key(direction: ExitDirection) -> &'static str {
    match direction {
        ExitDirection::Top => "1",
        ExitDirection::Right => "3",
        ExitDirection::Bottom => "5",
        ExitDirection::Left => "7",
    }
}

fn describe_exits_js(room_name: &str) -> Result<JsValue, JsValue> {
    let game = Reflect::get(&js_sys::global(), &JsValue::from_str("Game"))?;
    let map = Reflect::get(&game, &JsValue::from_str("map"))?;
    let describe_exits: Function = Reflect::get(&map, &JsValue::from_str("describeExits"))?.dyn_into()?;
    describe_exits.call1(&map, &JsValue::from_str(room_name))
}

/// Username of the player running the bot, taken from any owned controller.
pub fn my_username() -> Option<String> {
    game::rooms().values().find_map(|room| {
        let controller = room.controller()?;
        if controller.my() {
            controller.owner().map(|owner| owner.username())
        } else {
            None
        }
    })
}

/// A new JS `RoomVisual` of given room, passed to JS hooks.
fn js_room_visual(room_name: &str) -> Result<JsValue, JsValue> {
    let constructor: Function = Reflect::get(&js_sys::global(), &JsValue::from_str("RoomVisual"))?.dyn_into()?;
    let args = Array::new();
    args.push(&JsValue::from_str(room_name));
    Reflect::construct(&constructor, &args)
}

/// Wraps a JS function `(roomName, roomVisual, x, y, size) => void` as a hook.
fn js_hook<'a>(function: Function, room_visual: JsValue) -> RoomRenderHook<'a, RoomVisual> {
    Box::new(move |room_name: &str, _: &RoomVisual, x: f32, y: f32, size: f32| {
        let args = Array::new();
        args.push(&JsValue::from_str(room_name));
        args.push(&room_visual);
        args.push(&JsValue::from(x));
        args.push(&JsValue::from(y));
        args.push(&JsValue::from(size));
        log_err!(
            function.apply(&JsValue::UNDEFINED, &args).map_err(|e| format!("{:?}", e)),
            "Intel map hook failed"
        );
    })
}

fn js_function(options: &JsValue, key: &str) -> Option<Function> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Reads the configuration and hooks from JS options. Missing options mean defaults.
fn parse_options(
    target_room: &str,
    options: &JsValue,
) -> Result<(IntelMapConfig, RenderHooks<'static, RoomVisual>), IntelMapError> {
    if options.is_null() || options.is_undefined() {
        return Ok((IntelMapConfig::default(), RenderHooks::default()));
    }
    if !options.is_object() {
        return Err(IntelMapError::InvalidOptions("options are not an object".to_owned()));
    }

    let render_behind = js_function(options, RENDER_BEHIND_KEY);
    let render_in_front = js_function(options, RENDER_IN_FRONT_KEY);

    // Functions cannot be deserialized, so the hooks are removed from a copy of the options first.
    let plain_options = Object::assign(&Object::new(), options.unchecked_ref());
    for key in [RENDER_BEHIND_KEY, RENDER_IN_FRONT_KEY] {
        Reflect::delete_property(&plain_options, &JsValue::from_str(key))
            .map_err(|e| IntelMapError::InvalidOptions(format!("{:?}", e)))?;
    }
    let config = serde_wasm_bindgen::from_value::<IntelMapConfig>(plain_options.into())
        .map_err(|e| IntelMapError::InvalidOptions(e.to_string()))?;

    let mut hooks = RenderHooks::default();
    if render_behind.is_some() || render_in_front.is_some() {
        let room_visual = js_room_visual(target_room).map_err(|e| IntelMapError::InvalidOptions(format!("{:?}", e)))?;
        hooks.render_behind = render_behind.map(|function| js_hook(function, room_visual.clone()));
        hooks.render_in_front = render_in_front.map(|function| js_hook(function, room_visual));
    }

    Ok((config, hooks))
}

fn try_render_intel_map_from_js(target_room: &str, rooms_info: JsValue, options: &JsValue) -> Result<(), IntelMapError> {
    let rooms_info = IntelMap::parse(serde_wasm_bindgen::Deserializer::from(rooms_info))?;
    let room_name = RoomName::new(target_room).map_err(|_| IntelMapError::InvalidRoomName(target_room.to_owned()))?;
    let (config, mut hooks) = parse_options(target_room, options)?;

    let my_username = my_username();
    let env = MapEnvironment {
        current_tick: game_tick(),
        my_username: my_username.as_deref(),
        exits: &GameMapExits,
    };
    let visual = RoomVisual::new(Some(room_name));
    render_intel_map(&visual, target_room, &rooms_info, &config, &env, &mut hooks)
}

/// Draws the intel map in the target room, logging errors instead of throwing them into JS.
/// Nothing is drawn if the rooms info is missing or is not an object.
pub fn render_intel_map_from_js(target_room: &str, rooms_info: JsValue, options: JsValue) {
    log_err!(try_render_intel_map_from_js(target_room, rooms_info, &options), "Failed to render the intel map");
}
