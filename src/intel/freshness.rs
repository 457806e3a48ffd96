/// Lowest brightness of a room in the map, so that stale rooms are still distinguishable from unknown ones.
pub const MIN_BRIGHTNESS: f32 = 0.15;

/// Relative freshness of the intel about a room, between 0.0 (the oldest) and 1.0 (the freshest).
/// Intel becomes completely stale after `last_visit_threshold` ticks.
pub fn intel_freshness(last_visit: u32, current_tick: u32, last_visit_threshold: u32) -> f32 {
    let age = current_tick.saturating_sub(last_visit);
    if last_visit_threshold == 0 {
        return if age == 0 { 1.0 } else { 0.0 };
    }
    (1.0 - age as f32 / last_visit_threshold as f32).clamp(0.0, 1.0)
}

/// Value (in HSV) of the color of a room with given intel freshness.
#[inline]
pub fn brightness(freshness: f32) -> f32 {
    freshness.max(MIN_BRIGHTNESS)
}
