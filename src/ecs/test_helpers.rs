use bevy_app::App;
use bevy_ecs::message::Messages;

use crate::ecs::commands::TerritoryCommand;
use crate::ecs::events::TerritoryNotification;
use crate::ecs::schedule::DecayTick;

/// Run `n` ticks.
pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(DecayTick);
    }
}

/// Queue a command for the next tick's applicator.
pub fn send_command(app: &mut App, command: TerritoryCommand) {
    app.world_mut()
        .resource_mut::<Messages<TerritoryCommand>>()
        .write(command);
}

/// Run one tick and return the notifications the applicator emitted during it.
pub fn tick_collecting(app: &mut App) -> Vec<TerritoryNotification> {
    app.world_mut().run_schedule(DecayTick);
    app.world()
        .resource::<Messages<TerritoryNotification>>()
        .iter_current_update_messages()
        .cloned()
        .collect()
}
