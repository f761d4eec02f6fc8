//! Game state hooks.
//!
//! Registered in [`SystemsStore`](crate::resources::systemsstore::SystemsStore)
//! and run by the game state observer:
//! - [`setup`] loads every texture and animation track once, spawns the
//!   player and the cloaked portal, then requests [`GameStates::Playing`].
//! - [`enter_play`] populates the scene with one monster of each kind.
//! - [`quit_game`] logs the session summary before the loop exits.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::monster::{Monster, MonsterKind};
use crate::components::portal::Portal;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::screensize::ScreenSize;
use crate::resources::session::{GamePhase, SessionState};
use crate::resources::spawner::MonsterSpawner;
use crate::resources::texturestore::{RaylibFrameLoader, TextureStore};
use crate::systems::player::spawn_player;
use crate::systems::portal::{PORTAL_TEXTURE_KEY, portal_bundle};
use crate::systems::render::{background_key, background_path};
use crate::systems::spawn::populate_monsters;

const PORTAL_TEXTURE_PATH: &str = "Map/Portal.png";

#[allow(clippy::too_many_arguments)]
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    session: Res<SessionState>,
    mut animations: ResMut<AnimationStore>,
    mut textures: ResMut<TextureStore>,
) {
    let asset_dir = config.asset_dir.clone();
    info!("Loading assets from {}", asset_dir.display());

    {
        let mut loader = RaylibFrameLoader {
            rl: &mut *rl,
            thread: &*th,
            textures: &mut *textures,
        };
        animations.ensure_player_animations(&asset_dir, &mut loader);
    }

    let mut load_static = |key: &str, relative: &str| {
        let path = asset_dir.join(relative);
        textures.load_into(&mut rl, &th, key, &path.to_string_lossy())
    };
    for phase in GamePhase::ALL {
        load_static(&background_key(phase), &background_path(phase));
    }
    for kind in MonsterKind::ALL {
        if !load_static(kind.texture_key(), kind.texture_path()) {
            warn!("{:?} monsters will be drawn as solid rectangles", kind);
        }
    }
    load_static(PORTAL_TEXTURE_KEY, PORTAL_TEXTURE_PATH);

    spawn_player(&mut commands, &config, &screen);

    let target = session
        .current_phase
        .next()
        .unwrap_or(session.current_phase);
    commands.spawn(portal_bundle(Portal::new(target)));

    next_state.set(GameStates::Playing);
}

pub fn enter_play(
    mut commands: Commands,
    mut spawner: ResMut<MonsterSpawner>,
    screen: Res<ScreenSize>,
    monsters: Query<(), With<Monster>>,
) {
    if !monsters.is_empty() {
        info!("Resuming with {} monsters", monsters.iter().count());
        return;
    }
    populate_monsters(&mut commands, &mut spawner, &screen);
}

pub fn quit_game(session: Res<SessionState>) {
    info!(
        "Quitting in phase {} with {} kills and {} health",
        session.current_phase, session.kill_count, session.player_health
    );
}
