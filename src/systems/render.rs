//! Frame rendering.
//!
//! Draw order: map background of the current phase, the portal (only while
//! armed), monsters, then players. Drawing faults are never fatal; each one
//! is logged and the affected entity is skipped for this frame.
use bevy_ecs::prelude::*;
use log::{error, warn};
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::monster::Monster;
use crate::components::player::Player;
use crate::components::portal::Portal;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::{AnimationStore, FrameError};
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::{GamePhase, SessionState};
use crate::resources::texturestore::TextureStore;
use crate::systems::portal::PORTAL_TEXTURE_KEY;

/// Texture key of the background drawn during `phase`.
pub fn background_key(phase: GamePhase) -> String {
    format!("map_{}", phase)
}

/// Background file of `phase`, relative to the asset directory.
pub fn background_path(phase: GamePhase) -> String {
    format!("Map/{}.png", phase)
}

/// Source and destination rectangles for a whole-texture draw.
///
/// A negative source width mirrors the texture horizontally.
pub fn sprite_rects(
    tex_width: f32,
    tex_height: f32,
    position: Vector2,
    width: f32,
    height: f32,
    flip: bool,
) -> (Rectangle, Rectangle) {
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: if flip { -tex_width } else { tex_width },
        height: tex_height,
    };
    let dest = Rectangle {
        x: position.x,
        y: position.y,
        width,
        height,
    };
    (src, dest)
}

/// Texture of the frame an animation points at.
pub fn resolve_frame<'a>(
    animations: &AnimationStore,
    textures: &'a TextureStore,
    animation: &Animation,
) -> Result<&'a Texture2D, FrameError> {
    let key = animations.frame_key(animation)?;
    textures
        .get(key)
        .ok_or_else(|| FrameError::MissingTexture(key.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    animations: Res<AnimationStore>,
    session: Res<SessionState>,
    screen: Res<ScreenSize>,
    debug_mode: Option<Res<DebugMode>>,
    portals: Query<(&Portal, &MapPosition, &BoxCollider)>,
    monsters: Query<(&Monster, &MapPosition, &Sprite)>,
    players: Query<(&Player, &MapPosition, &Sprite, &Animation)>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
) {
    let fps = rl.get_fps();
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    if let Some(tex) = textures.get(&background_key(session.current_phase)) {
        let (src, dest) = sprite_rects(
            tex.width as f32,
            tex.height as f32,
            Vector2::new(0.0, 0.0),
            screen.w as f32,
            screen.h as f32,
            false,
        );
        d.draw_texture_pro(tex, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
    }

    for (portal, position, collider) in portals.iter() {
        if !portal.armed {
            continue;
        }
        let (x, y, w, h) = collider.get_aabb(position.pos);
        match textures.get(PORTAL_TEXTURE_KEY) {
            Some(tex) => {
                let (src, dest) =
                    sprite_rects(tex.width as f32, tex.height as f32, Vector2::new(x, y), w, h, false);
                d.draw_texture_pro(tex, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
            }
            None => d.draw_rectangle(x as i32, y as i32, w as i32, h as i32, Color::SKYBLUE),
        }
    }

    for (monster, position, sprite) in monsters.iter() {
        let texture = sprite.tex_key.as_deref().and_then(|key| textures.get(key));
        match texture {
            Some(tex) => {
                let (src, dest) = sprite_rects(
                    tex.width as f32,
                    tex.height as f32,
                    position.pos,
                    sprite.width,
                    sprite.height,
                    false,
                );
                d.draw_texture_pro(tex, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
            }
            None => d.draw_rectangle(
                position.pos.x as i32,
                position.pos.y as i32,
                sprite.width as i32,
                sprite.height as i32,
                monster.kind.fallback_color(),
            ),
        }
    }

    for (player, position, sprite, animation) in players.iter() {
        match resolve_frame(&animations, &textures, animation) {
            Ok(tex) => {
                let (src, dest) = sprite_rects(
                    tex.width as f32,
                    tex.height as f32,
                    position.pos,
                    sprite.width,
                    sprite.height,
                    player.flip,
                );
                d.draw_texture_pro(tex, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
            }
            Err(e @ FrameError::MissingTexture(_)) => warn!("Skipping player frame: {}", e),
            Err(e) => error!("Skipping player frame: {}", e),
        }
    }

    if debug_mode.is_some() {
        for (collider, position) in colliders.iter() {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
        let text = format!(
            "DEBUG MODE (press F11 to toggle) | FPS: {} | Phase: {} | Kills: {} | Health: {}",
            fps, session.current_phase, session.kill_count, session.player_health
        );
        d.draw_text(&text, 10, 10, 10, Color::RAYWHITE);
        let monster_count = monsters.iter().count();
        d.draw_text(
            &format!("Monsters: {}", monster_count),
            10,
            30,
            10,
            Color::RAYWHITE,
        );
    }
}
