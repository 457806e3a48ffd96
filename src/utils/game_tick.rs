/// Current game tick.
/// A wrapper on the API so that rendering itself only ever sees the tick as an explicit argument.
#[inline]
pub fn game_tick() -> u32 {
    screeps::game::time()
}
