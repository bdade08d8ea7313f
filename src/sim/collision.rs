//! Hero vs stalactite collision
//!
//! Stalactites hang from y = 0 and the hero stands on y = screen_height, so
//! the only question is whether the hero's top is above the lowest tip of any
//! stalactite sharing its columns.

use super::state::{Hero, Obstacle};

/// True if the stalactite's columns overlap the hero's columns (open interval)
#[inline]
pub fn overlaps_hero(obstacle_x: i32, obstacle_width: i32, hero: &Hero) -> bool {
    obstacle_x > hero.x - obstacle_width && obstacle_x < hero.x + hero.width
}

/// Tallest stalactite above the hero, if any
pub fn max_overlap_height(obstacles: &[Obstacle], obstacle_width: i32, hero: &Hero) -> Option<i32> {
    obstacles
        .iter()
        .filter(|o| overlaps_hero(o.x, obstacle_width, hero))
        .map(|o| o.height)
        .max()
}

/// True if the hero survives this frame.
///
/// The strict `<` is part of the game's difficulty and must stay as is: a hero
/// whose top row touches the stalactite tip row is a hit.
pub fn is_safe(obstacles: &[Obstacle], obstacle_width: i32, hero: &Hero, screen_height: i32) -> bool {
    match max_overlap_height(obstacles, obstacle_width, hero) {
        None => true,
        Some(max_height) => hero.height < screen_height - max_height,
    }
}
