//! Input collection.
//!
//! Polls raylib once per frame, refreshes the
//! [`InputState`](crate::resources::input::InputState) resource and turns
//! discrete presses into events: a fire tap becomes a
//! [`FireEvent`](crate::events::input::FireEvent), F11 toggles the debug
//! overlay and Escape requests the quit transition. This runs as a free
//! function from the main loop because the raylib handle lives outside the
//! ECS world.

use bevy_ecs::prelude::*;

use crate::events::input::FireEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;

/// Poll raylib for input, update the `InputState` resource and trigger the
/// derived events.
pub fn update_input_state(rl: &raylib::RaylibHandle, world: &mut World) {
    let (fire_at, toggle_debug, quit) = {
        let mut input = world.resource_mut::<InputState>();

        input.action_back.active = rl.is_key_down(input.action_back.key_binding);
        input.action_back.just_pressed = rl.is_key_pressed(input.action_back.key_binding);
        input.mode_debug.active = rl.is_key_down(input.mode_debug.key_binding);
        input.mode_debug.just_pressed = rl.is_key_pressed(input.mode_debug.key_binding);

        input.fire.just_pressed = rl.is_mouse_button_pressed(input.fire.button_binding);
        input.fire.position = rl.get_mouse_position();

        (
            input.fire.just_pressed.then_some(input.fire.position),
            input.mode_debug.just_pressed,
            input.action_back.just_pressed,
        )
    };

    if let Some(at) = fire_at {
        world.trigger(FireEvent { at });
    }
    if toggle_debug {
        world.trigger(SwitchDebugEvent {});
    }
    if quit {
        world
            .resource_mut::<NextGameState>()
            .set(GameStates::Quitting);
    }
}
