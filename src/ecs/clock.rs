use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Tick counter. `advance_clock` moves it forward at the end of each tick
/// (in `DecayPhase::Last`), so systems see the current tick before it advances.
#[derive(Resource, Debug, Default)]
pub struct DecayClock {
    pub tick_count: u64,
}

impl DecayClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick_count += 1;
    }
}

pub fn advance_clock(mut clock: ResMut<DecayClock>) {
    clock.advance();
}
