//! Collision resolution between the player circle and live obstacles
//!
//! Solid obstacles are axis-aligned rectangles tested against the player
//! via the closest-point-on-rectangle distance. Holes use a separate
//! horizontal-overlap test with an edge margin so grazing the lip does not
//! swallow the player.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::*;

/// Outcome of testing the player against one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No contact
    Miss,
    /// Solid contact; ends the session immediately
    Blocking,
    /// The player dropped into a hole; enters the fall sequence
    FallThrough,
}

/// Resolve one player/obstacle pair. Kind selects the procedure; exactly
/// one resolution is computed per obstacle per tick.
pub fn resolve(player: &Player, obstacle: &Obstacle) -> CollisionOutcome {
    if obstacle.kind.is_hole() {
        hole_test(player, obstacle)
    } else {
        solid_test(player, obstacle)
    }
}

/// Fall-through when the player's horizontal extent overlaps the hole's
/// extent (inset by the edge margin) and the player's lowest point has not
/// cleared the hole's top edge.
fn hole_test(player: &Player, hole: &Obstacle) -> CollisionOutcome {
    let left = hole.x + HOLE_EDGE_MARGIN;
    let right = hole.x + hole.width - HOLE_EDGE_MARGIN;
    let over = player.pos.x + player.radius > left && player.pos.x - player.radius < right;

    if over && player.bottom() >= hole.y {
        CollisionOutcome::FallThrough
    } else {
        CollisionOutcome::Miss
    }
}

/// Circle-vs-rectangle: clamp the circle center to the rectangle bounds on
/// each axis to find the closest point, then compare its distance to the
/// player's radius.
fn solid_test(player: &Player, obstacle: &Obstacle) -> CollisionOutcome {
    let closest = Vec2::new(
        player.pos.x.clamp(obstacle.x, obstacle.x + obstacle.width),
        player.pos.y.clamp(obstacle.y, obstacle.y + obstacle.height),
    );

    if (player.pos - closest).length() < player.radius {
        CollisionOutcome::Blocking
    } else {
        CollisionOutcome::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ObstacleKind, Posture};

    fn runner() -> Player {
        Player::new(-18.0)
    }

    fn obstacle_at(kind: ObstacleKind, x: f32) -> Obstacle {
        let mut obstacle = Obstacle::spawn(kind);
        obstacle.x = x;
        obstacle
    }

    #[test]
    fn test_solid_blocks_inside_radius() {
        let player = runner();
        // Box left edge 20 units from the player center; closest point is
        // on the edge at the player's own height
        let obstacle = obstacle_at(ObstacleKind::Box, player.pos.x + 20.0);
        assert_eq!(resolve(&player, &obstacle), CollisionOutcome::Blocking);
    }

    #[test]
    fn test_solid_misses_at_radius_or_beyond() {
        let player = runner();
        // Exactly at the radius: strict less-than, so no contact
        let touching = obstacle_at(ObstacleKind::Box, player.pos.x + player.radius);
        assert_eq!(resolve(&player, &touching), CollisionOutcome::Miss);

        let clear = obstacle_at(ObstacleKind::Box, player.pos.x + player.radius + 1.0);
        assert_eq!(resolve(&player, &clear), CollisionOutcome::Miss);
    }

    #[test]
    fn test_flyer_hits_runner_but_not_ducker() {
        let mut player = runner();
        let flyer = obstacle_at(ObstacleKind::FlyerLow, player.pos.x - 30.0);
        assert_eq!(resolve(&player, &flyer), CollisionOutcome::Blocking);

        player.duck();
        assert_eq!(resolve(&player, &flyer), CollisionOutcome::Miss);
    }

    #[test]
    fn test_high_flyer_cleared_by_duck() {
        let mut player = runner();
        let flyer = obstacle_at(ObstacleKind::FlyerHigh, player.pos.x - 35.0);
        assert_eq!(resolve(&player, &flyer), CollisionOutcome::Blocking);

        player.duck();
        assert_eq!(resolve(&player, &flyer), CollisionOutcome::Miss);
    }

    #[test]
    fn test_hole_fall_through_while_grounded() {
        let player = runner();
        // Hole centered under the lane; runner on the ground drops in
        let hole = obstacle_at(ObstacleKind::Hole, player.pos.x - 35.0);
        assert_eq!(resolve(&player, &hole), CollisionOutcome::FallThrough);
    }

    #[test]
    fn test_hole_cleared_when_airborne() {
        let mut player = runner();
        let hole = obstacle_at(ObstacleKind::Hole, player.pos.x - 35.0);

        // Lift the player so the bottom is above the hole's top edge
        player.posture = Posture::Jumping;
        player.pos.y = hole.y - player.radius - 1.0;
        assert_eq!(resolve(&player, &hole), CollisionOutcome::Miss);
    }

    #[test]
    fn test_hole_edge_graze_is_a_miss() {
        let player = runner();
        // Player's right extent reaches only into the margin strip
        let hole = obstacle_at(
            ObstacleKind::Hole,
            player.pos.x + player.radius - HOLE_EDGE_MARGIN,
        );
        assert_eq!(resolve(&player, &hole), CollisionOutcome::Miss);
    }

    #[test]
    fn test_tower_demands_a_higher_jump_than_box() {
        let mut player = runner();
        let tower = obstacle_at(ObstacleKind::Tower, player.pos.x - 19.0);

        // A shallow hop that would clear a box still clips the tower
        player.posture = Posture::Jumping;
        player.pos.y = GROUND_LINE - 40.0 - player.radius;
        assert_eq!(resolve(&player, &tower), CollisionOutcome::Blocking);

        // Above the tower top the lane is clear
        player.pos.y = tower.y - player.radius - 1.0;
        assert_eq!(resolve(&player, &tower), CollisionOutcome::Miss);
    }
}
