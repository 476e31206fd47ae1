use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one territory tick.
/// Run manually via `app.world_mut().run_schedule(DecayTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecayTick;

/// Ordered phases within each tick.
///
/// Host systems queue `TerritoryCommand`s in `Update`, the applicator turns
/// them into notifications in `PostUpdate`, and TerritoryDecay reacts in
/// `Reactions`. Phases run in declaration order: PreUpdate < Update <
/// PostUpdate < Reactions < Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecayPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Reactions,
    Last,
}

/// Build a configured `DecayTick` schedule with phase ordering.
pub fn configure_decay_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(DecayTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            DecayPhase::PreUpdate,
            DecayPhase::Update,
            DecayPhase::PostUpdate,
            DecayPhase::Reactions,
            DecayPhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(advance_clock.in_set(DecayPhase::Last));
    schedule
}
