//! Parrybound main entry point.
//!
//! A small 2D action game written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Parse the CLI, load `config.ini`, open the window
//! 2. Insert resources, register observers and the state hook systems
//! 3. Enter Setup (load assets, spawn player and portal), then Playing
//! 4. Each frame: advance time, update the player and monsters, spawn,
//!    check the portal, poll input (parry and portal events fire here),
//!    render
//! 5. On window close, enter Quitting and exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::monster::monster_killed_observer;
use crate::events::phase::phase_changed_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::AnimationStore;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::SessionState;
use crate::resources::spawner::MonsterSpawner;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::update_input_state;
use crate::systems::monster::monster_behavior;
use crate::systems::parry::parry_observer;
use crate::systems::player::player_update;
use crate::systems::portal::{portal_arm_observer, portal_trigger_system};
use crate::systems::render::render_system;
use crate::systems::spawn::monster_spawn_system;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Parrybound: parry your way through the phases.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Asset directory; overrides `[assets] dir` from the config file.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,

    /// Seed for monster placement.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{} ({}), using defaults", e, config.config_path.display());
    }
    if let Some(dir) = cli.assets {
        config.asset_dir = dir;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Parrybound")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    let rng = match cli.seed {
        Some(seed) => {
            info!("Monster placement seed: {}", seed);
            fastrand::Rng::with_seed(seed)
        }
        None => fastrand::Rng::new(),
    };
    world.insert_resource(MonsterSpawner::from_config(&config, rng));
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(SessionState::new());
    world.insert_resource(AnimationStore::new());
    world.insert_resource(TextureStore::new());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn(Observer::new(observe_gamestate_change_event));

    // Game state systems store
    let mut systems_store = SystemsStore::new();
    let setup_system_id = world.register_system(game::setup);
    systems_store.insert("setup", setup_system_id);
    let enter_play_system_id = world.register_system(game::enter_play);
    systems_store.insert("enter_play", enter_play_system_id);
    let quit_game_system_id = world.register_system(game::quit_game);
    systems_store.insert("quit_game", quit_game_system_id);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(parry_observer));
    world.spawn(Observer::new(portal_arm_observer));
    world.spawn(Observer::new(phase_changed_observer));
    world.spawn(Observer::new(monster_killed_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    // Set next GameState to Setup
    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // Call immediately to enter Setup state
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(
        (
            player_update,
            monster_behavior,
            monster_spawn_system,
            portal_trigger_system,
            update_input_state,
            render_system,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }

    if world.resource::<GameState>().get() != GameStates::Quitting {
        world.resource_mut::<NextGameState>().set(GameStates::Quitting);
        world.trigger(GameStateChangedEvent {});
        world.flush();
    }
    info!("Bye!");
}
