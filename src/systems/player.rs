//! Per-tick player update.
//!
//! [`player_update`] reads the held directions from
//! [`InputState`](crate::resources::input::InputState) and drives every
//! [`Player`] through one fixed sequence: velocity, position, state, frame
//! reset, frame advance, parry timer, bounds clamp.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::monster::Monster;
use crate::components::player::{PLAYER_SIZE, Player, clamp_to_screen};
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Components of a freshly spawned player standing at the play area centre.
pub fn player_bundle(
    config: &GameConfig,
    screen: &ScreenSize,
) -> (Player, MapPosition, Sprite, Animation, BoxCollider) {
    let (x, y) = screen.center();
    let player = Player::from_config(config);
    let animation = Animation::new(player.state.animation_key());
    (
        player,
        MapPosition::new(x, y),
        Sprite::animated(PLAYER_SIZE, PLAYER_SIZE),
        animation,
        Player::collision_rect(),
    )
}

/// Spawn a player. Animation tracks are shared, so this never loads assets.
pub fn spawn_player(commands: &mut Commands, config: &GameConfig, screen: &ScreenSize) -> Entity {
    let entity = commands.spawn(player_bundle(config, screen)).id();
    debug!("Spawned player {:?}", entity);
    entity
}

pub fn player_update(
    mut query: Query<(&mut Player, &mut MapPosition, &mut Animation, &Sprite), Without<Monster>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    animations: Res<AnimationStore>,
    screen: Res<ScreenSize>,
) {
    let dt = time.delta;
    for (mut player, mut position, mut animation, sprite) in query.iter_mut() {
        let is_moving = player.update_velocity(&input, dt);

        let velocity = player.velocity;
        position.pos.x += velocity.x * dt;
        position.pos.y += velocity.y * dt;

        if player.derive_state(is_moving) {
            debug!("Player state -> {:?}", player.state);
            animation.restart(player.state.animation_key());
        }
        let track = animations.get(&animation.animation_key);
        animation.advance(dt, track);

        player.parry.tick(dt);

        clamp_to_screen(&mut position, sprite.width, sprite.height, &screen);
    }
}
