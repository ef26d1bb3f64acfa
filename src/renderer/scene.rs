//! Session-to-draw-data translation
//!
//! Pulls everything the shader needs out of a `Session`. The sim knows
//! nothing about anchors or sprite kinds; those are render concerns and they
//! live here.

use glam::Vec2;

use crate::consts::*;
use crate::sim::Session;

/// Sprite kind codes (must match the shader)
pub const SPRITE_ROCK: u32 = 0;
pub const SPRITE_PLAYER_RUN: u32 = 1;
pub const SPRITE_PLAYER_JUMP: u32 = 2;

/// One quad for the shader to fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    /// Top-left corner in world units
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: u32,
}

/// Per-frame draw data
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Background scroll offset (world units, negative)
    pub scroll: f32,
    pub sprites: Vec<SpriteInstance>,
}

/// Build the draw data for the current session state
pub fn build_scene(session: &Session) -> Scene {
    let mut sprites = Vec::with_capacity(session.obstacles.len() + 1);

    for obstacle in session.obstacles.iter() {
        // Anchor offset applies at draw time only; hitboxes use raw rects
        sprites.push(SpriteInstance {
            pos: Vec2::new(
                obstacle.x - OBSTACLE_ANCHOR * obstacle.width,
                obstacle.y - OBSTACLE_ANCHOR * obstacle.height,
            ),
            size: Vec2::new(obstacle.width, obstacle.height),
            kind: SPRITE_ROCK,
        });
    }

    let kind = if session.player.airborne {
        SPRITE_PLAYER_JUMP
    } else {
        SPRITE_PLAYER_RUN
    };
    sprites.push(SpriteInstance {
        pos: Vec2::new(PLAYER_X, session.player.y),
        size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        kind,
    });

    Scene {
        scroll: session.scroll,
        sprites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim;

    #[test]
    fn test_obstacle_quads_are_anchor_shifted() {
        let mut session = Session::new();
        session
            .obstacles
            .spawn(500.0, OBSTACLE_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        let scene = build_scene(&session);
        let rock = scene.sprites[0];
        assert_eq!(rock.kind, SPRITE_ROCK);
        assert_eq!(rock.pos.x, 500.0 - OBSTACLE_ANCHOR * OBSTACLE_WIDTH);
        assert_eq!(rock.pos.y, OBSTACLE_Y - OBSTACLE_ANCHOR * OBSTACLE_HEIGHT);
    }

    #[test]
    fn test_player_sprite_follows_airborne_flag() {
        let mut session = Session::new();
        let scene = build_scene(&session);
        assert_eq!(scene.sprites.last().unwrap().kind, SPRITE_PLAYER_RUN);

        let mut events = Vec::new();
        sim::jump(&mut session, &mut events);
        sim::frame(&mut session, &mut events);
        let scene = build_scene(&session);
        let player = scene.sprites.last().unwrap();
        assert_eq!(player.kind, SPRITE_PLAYER_JUMP);
        assert!(player.pos.y < GROUND_Y);
    }
}
