//! Player character components.
//!
//! [`Player`] owns the movement and parry state of the controlled character.
//! The per-tick logic lives in [`crate::systems::player`] and
//! [`crate::systems::parry`]; the helpers here are pure so they can be
//! exercised without a world.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;

/// Drawn size of the player in pixels.
pub const PLAYER_SIZE: f32 = 150.0;
/// Fraction of the sprite width covered by the collision rectangle.
pub const COLLISION_WIDTH_FACTOR: f32 = 0.5;
/// Fraction of the sprite height covered by the collision rectangle.
pub const COLLISION_HEIGHT_FACTOR: f32 = 0.6;

/// Behavioural state; selects the animation track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Move,
    Parry,
    Damage,
    Death,
}

impl PlayerState {
    pub const ALL: [PlayerState; 5] = [
        PlayerState::Idle,
        PlayerState::Move,
        PlayerState::Parry,
        PlayerState::Damage,
        PlayerState::Death,
    ];

    /// Key of the track in the [`AnimationStore`](crate::resources::animationstore::AnimationStore).
    pub fn animation_key(self) -> &'static str {
        match self {
            PlayerState::Idle => "player_idle",
            PlayerState::Move => "player_move",
            PlayerState::Parry => "player_parry",
            PlayerState::Damage => "player_damage",
            PlayerState::Death => "player_death",
        }
    }

    /// File name prefix of the frames on disk.
    pub fn asset_name(self) -> &'static str {
        match self {
            PlayerState::Idle => "Idle",
            PlayerState::Move => "Move",
            PlayerState::Parry => "Parry",
            PlayerState::Damage => "Damage",
            PlayerState::Death => "Death",
        }
    }

    pub fn frame_count(self) -> usize {
        match self {
            PlayerState::Idle => 8,
            PlayerState::Move => 5,
            PlayerState::Parry => 6,
            PlayerState::Damage => 8,
            PlayerState::Death => 6,
        }
    }
}

/// Facing direction; the parry lunge goes this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    /// Unit vector in screen coordinates (y grows downward).
    pub fn unit(self) -> Vector2 {
        match self {
            Facing::Up => Vector2::new(0.0, -1.0),
            Facing::Right => Vector2::new(1.0, 0.0),
            Facing::Down => Vector2::new(0.0, 1.0),
            Facing::Left => Vector2::new(-1.0, 0.0),
        }
    }
}

/// Parry flag and its countdown.
///
/// A single timer covers both the active window and the re-parry lockout:
/// the flag stays set for the whole `cooldown + duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParryState {
    pub is_parrying: bool,
    pub cooldown: f32,
    pub duration: f32,
    /// Remaining seconds; a new parry is accepted once this is `<= 0`.
    pub timer: f32,
}

impl ParryState {
    pub fn new(cooldown: f32, duration: f32) -> Self {
        Self {
            is_parrying: false,
            cooldown,
            duration,
            timer: 0.0,
        }
    }

    pub fn ready(&self) -> bool {
        self.timer <= 0.0
    }

    pub fn start(&mut self) {
        self.is_parrying = true;
        self.timer = self.cooldown + self.duration;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
        }
        if self.timer <= 0.0 {
            self.is_parrying = false;
        }
    }
}

/// Movement and combat constants of a player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    pub acceleration: f32,
    pub deceleration: f32,
    pub max_speed: f32,
    pub parry_range: f32,
    pub parry_lunge: f32,
    /// Kills are replaced only while the monster count is below this.
    pub replacement_cap: usize,
}

impl PlayerTuning {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            acceleration: config.acceleration,
            deceleration: config.deceleration,
            max_speed: config.max_speed,
            parry_range: config.parry_range,
            parry_lunge: config.parry_lunge,
            replacement_cap: config.replacement_cap,
        }
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::new())
    }
}

/// The controlled character.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Player {
    pub velocity: Vector2,
    pub facing: Facing,
    /// Draw the frame mirrored horizontally.
    pub flip: bool,
    pub state: PlayerState,
    pub prev_state: PlayerState,
    pub parry: ParryState,
    pub tuning: PlayerTuning,
}

impl Default for Player {
    fn default() -> Self {
        Self::from_config(&GameConfig::new())
    }
}

impl Player {
    pub fn new(tuning: PlayerTuning, parry: ParryState) -> Self {
        Self {
            velocity: Vector2::new(0.0, 0.0),
            facing: Facing::Up,
            flip: false,
            state: PlayerState::Idle,
            prev_state: PlayerState::Idle,
            parry,
            tuning,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            PlayerTuning::from_config(config),
            ParryState::new(config.parry_cooldown, config.parry_duration),
        )
    }

    /// Accelerate along held directions and decelerate idle axes.
    ///
    /// Directions are applied left, right, up, down; the last held one sets
    /// the facing. Returns `true` if any direction is held.
    pub fn update_velocity(&mut self, input: &InputState, dt: f32) -> bool {
        let accel = self.tuning.acceleration * dt;
        let max = self.tuning.max_speed;
        let mut is_moving = false;

        if input.move_left.active {
            self.velocity.x = (self.velocity.x - accel).max(-max);
            self.facing = Facing::Left;
            self.flip = false;
            is_moving = true;
        }
        if input.move_right.active {
            self.velocity.x = (self.velocity.x + accel).min(max);
            self.facing = Facing::Right;
            self.flip = true;
            is_moving = true;
        }
        if input.move_up.active {
            self.velocity.y = (self.velocity.y - accel).max(-max);
            self.facing = Facing::Up;
            is_moving = true;
        }
        if input.move_down.active {
            self.velocity.y = (self.velocity.y + accel).min(max);
            self.facing = Facing::Down;
            is_moving = true;
        }

        let decel = self.tuning.deceleration * dt;
        if !input.move_left.active && !input.move_right.active {
            self.velocity.x = approach_zero(self.velocity.x, decel);
        }
        if !input.move_up.active && !input.move_down.active {
            self.velocity.y = approach_zero(self.velocity.y, decel);
        }

        is_moving
    }

    /// Pick the state for this tick: parry, then movement, then idle.
    ///
    /// Returns `true` on a transition.
    pub fn derive_state(&mut self, is_moving: bool) -> bool {
        self.state = if self.parry.is_parrying {
            PlayerState::Parry
        } else if is_moving {
            PlayerState::Move
        } else {
            PlayerState::Idle
        };
        if self.state != self.prev_state {
            self.prev_state = self.state;
            return true;
        }
        false
    }

    /// Collision rectangle used against the portal.
    pub fn collision_rect() -> BoxCollider {
        BoxCollider::shrunk(
            PLAYER_SIZE,
            PLAYER_SIZE,
            COLLISION_WIDTH_FACTOR,
            COLLISION_HEIGHT_FACTOR,
        )
    }

    /// Teleport to `(x, y)` and drop any residual velocity.
    pub fn reset_position(&mut self, position: &mut MapPosition, x: f32, y: f32) {
        position.pos = Vector2::new(x, y);
        self.velocity = Vector2::new(0.0, 0.0);
    }

    /// Displace `position` by the lunge distance toward the facing direction.
    /// The result is not clamped.
    pub fn lunge(&self, position: &mut MapPosition) {
        let dir = self.facing.unit();
        position.pos.x += dir.x * self.tuning.parry_lunge;
        position.pos.y += dir.y * self.tuning.parry_lunge;
    }
}

/// Keep a `width`×`height` rectangle fully inside the play area.
pub fn clamp_to_screen(position: &mut MapPosition, width: f32, height: f32, screen: &ScreenSize) {
    let max_x = screen.w as f32 - width;
    let max_y = screen.h as f32 - height;
    position.pos.x = position.pos.x.min(max_x).max(0.0);
    position.pos.y = position.pos.y.min(max_y).max(0.0);
}

fn approach_zero(value: f32, step: f32) -> f32 {
    if value > 0.0 {
        (value - step).max(0.0)
    } else if value < 0.0 {
        (value + step).min(0.0)
    } else {
        0.0
    }
}
