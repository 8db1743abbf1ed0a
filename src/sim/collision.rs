//! Collision and pass predicates
//!
//! All three are pure functions of the bird and obstacle geometry. A true
//! result from either collision predicate is fatal, so evaluation order
//! across the obstacle sequence does not affect the outcome.

use super::state::{Bird, Obstacle};

/// True if the bird touches the top or bottom of the field.
pub fn boundary_breach(bird: &Bird, field_height: f32) -> bool {
    bird.pos.y + bird.radius >= field_height || bird.pos.y - bird.radius <= 0.0
}

/// True if the bird overlaps either barrier of the obstacle.
///
/// Horizontal spans must overlap, and the bird must poke above the gap's
/// top edge or below its bottom edge.
pub fn hits_obstacle(bird: &Bird, obstacle: &Obstacle) -> bool {
    let horizontal = bird.pos.x + bird.radius > obstacle.x
        && bird.pos.x - bird.radius < obstacle.trailing_edge();
    let vertical = bird.pos.y - bird.radius < obstacle.gap_top
        || bird.pos.y + bird.radius > obstacle.gap_bottom();
    horizontal && vertical
}

/// True once the bird's leading edge has moved past the obstacle's
/// trailing edge.
pub fn cleared_obstacle(bird: &Bird, obstacle: &Obstacle) -> bool {
    bird.leading_edge() > obstacle.trailing_edge()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn bird_at(x: f32, y: f32) -> Bird {
        Bird {
            pos: Vec2::new(x, y),
            velocity: 0.0,
            radius: 20.0,
        }
    }

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            gap_top: 200.0,
            gap_height: 360.0,
            width: 50.0,
            passed: false,
        }
    }

    #[test]
    fn test_boundary_breach_bottom() {
        // Any overshoot past the floor counts, however small
        assert!(boundary_breach(&bird_at(160.0, 880.0), 900.0));
        assert!(boundary_breach(&bird_at(160.0, 880.1), 900.0));
        assert!(!boundary_breach(&bird_at(160.0, 879.9), 900.0));
    }

    #[test]
    fn test_boundary_breach_top() {
        assert!(boundary_breach(&bird_at(160.0, 20.0), 900.0));
        assert!(boundary_breach(&bird_at(160.0, 19.5), 900.0));
        assert!(!boundary_breach(&bird_at(160.0, 20.1), 900.0));
    }

    #[test]
    fn test_no_hit_inside_gap() {
        // Bird centered in the gap, horizontally overlapping the barrier
        let obstacle = obstacle_at(150.0);
        assert!(!hits_obstacle(&bird_at(160.0, 380.0), &obstacle));
    }

    #[test]
    fn test_hit_top_barrier() {
        let obstacle = obstacle_at(150.0);
        // Top edge pokes above gap_top = 200
        assert!(hits_obstacle(&bird_at(160.0, 210.0), &obstacle));
    }

    #[test]
    fn test_hit_bottom_barrier() {
        let obstacle = obstacle_at(150.0);
        // Bottom edge pokes below gap_bottom = 560
        assert!(hits_obstacle(&bird_at(160.0, 550.0), &obstacle));
    }

    #[test]
    fn test_no_hit_when_horizontally_clear() {
        let obstacle = obstacle_at(400.0);
        // Vertically inside a barrier but nowhere near it
        assert!(!hits_obstacle(&bird_at(160.0, 100.0), &obstacle));
    }

    #[test]
    fn test_cleared_obstacle_at_trailing_edge() {
        let obstacle = obstacle_at(150.0);
        // Trailing edge at 200; leading edge = x + 20
        assert!(!cleared_obstacle(&bird_at(180.0, 380.0), &obstacle));
        assert!(cleared_obstacle(&bird_at(180.1, 380.0), &obstacle));
    }
}
