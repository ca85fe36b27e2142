//! Hit detection between the bar and the targets
//!
//! A target is skewered when its center lies horizontally within the bar's
//! span and vertically within the hit tolerance of the bar's line.

use super::state::{Bar, Target};

/// Whether the bar currently passes through `target`.
///
/// Horizontal containment is inclusive at both ends. The vertical check is
/// strict: a distance of exactly `tolerance_y` is a miss.
#[inline]
pub fn bar_skewers(bar: &Bar, target: &Target, tolerance_y: f32) -> bool {
    let in_span = bar.pos.x <= target.pos.x && target.pos.x <= bar.right();
    let on_line = (bar.pos.y - target.pos.y).abs() < tolerance_y;
    in_span && on_line
}

/// Skewer every free target the bar passes through.
///
/// Targets are visited in column order. Each newly hit target is marked stuck
/// and bumps the bar's hit count; already-hit targets are skipped, so calling
/// this repeatedly never counts a target twice. Returns the indices hit by
/// this call.
pub fn check_collision(bar: &mut Bar, targets: &mut [Target], tolerance_y: f32) -> Vec<usize> {
    let mut hits = Vec::new();
    for (index, target) in targets.iter_mut().enumerate() {
        if target.is_hit {
            continue;
        }
        if bar_skewers(bar, target, tolerance_y) {
            target.stick();
            bar.hit_count += 1;
            hits.push(index);
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(target_positions: &[(f32, f32)]) -> (Bar, Vec<Target>) {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(0);
        let targets = target_positions
            .iter()
            .map(|&(x, y)| {
                let mut t = Target::new(x, &config, &mut rng);
                t.pos = Vec2::new(x, y);
                t
            })
            .collect();
        let mut bar = Bar::new(&config);
        bar.fire();
        (bar, targets)
    }

    #[test]
    fn test_hit_within_span_and_tolerance() {
        let (mut bar, mut targets) = setup(&[(100.0, 122.0)]);
        bar.pos = Vec2::new(50.0, 120.0);
        let hits = check_collision(&mut bar, &mut targets, 4.0);
        assert_eq!(hits, vec![0]);
        assert_eq!(bar.hit_count, 1);
        assert!(targets[0].is_hit);
        assert!(targets[0].is_stuck);
    }

    #[test]
    fn test_span_edges_are_inclusive() {
        let (mut bar, mut targets) = setup(&[(50.0, 120.0), (150.0, 120.0), (151.0, 120.0)]);
        bar.pos = Vec2::new(50.0, 120.0);
        let hits = check_collision(&mut bar, &mut targets, 4.0);
        assert_eq!(hits, vec![0, 1]);
        assert!(!targets[2].is_hit);
    }

    #[test]
    fn test_tolerance_is_strict() {
        let (mut bar, mut targets) = setup(&[(100.0, 124.0), (160.0, 116.0), (220.0, 123.9)]);
        bar.pos = Vec2::new(0.0, 120.0);
        bar.length = 300.0;
        let hits = check_collision(&mut bar, &mut targets, 4.0);
        assert_eq!(hits, vec![2]);
        assert_eq!(bar.hit_count, 1);
    }

    #[test]
    fn test_multiple_hits_in_one_call() {
        let (mut bar, mut targets) = setup(&[(40.0, 120.0), (100.0, 119.0), (280.0, 120.0)]);
        bar.pos = Vec2::new(30.0, 120.0);
        let hits = check_collision(&mut bar, &mut targets, 4.0);
        assert_eq!(hits, vec![0, 1]);
        assert_eq!(bar.hit_count, 2);
    }

    #[test]
    fn test_no_double_hit() {
        let (mut bar, mut targets) = setup(&[(100.0, 120.0)]);
        bar.pos = Vec2::new(60.0, 120.0);
        check_collision(&mut bar, &mut targets, 4.0);
        for _ in 0..10 {
            assert!(check_collision(&mut bar, &mut targets, 4.0).is_empty());
        }
        assert_eq!(bar.hit_count, 1);
    }

    proptest! {
        #[test]
        fn prop_repeat_calls_never_recount(
            bar_x in 0.0f32..320.0,
            bar_y in 0.0f32..240.0,
            ys in proptest::collection::vec(0.0f32..240.0, 1..6),
            repeats in 1usize..8,
        ) {
            let positions: Vec<(f32, f32)> = ys
                .iter()
                .enumerate()
                .map(|(i, &y)| (40.0 + i as f32 * 60.0, y))
                .collect();
            let (mut bar, mut targets) = setup(&positions);
            bar.pos = Vec2::new(bar_x, bar_y);
            let first = check_collision(&mut bar, &mut targets, 4.0).len() as u32;
            for _ in 0..repeats {
                check_collision(&mut bar, &mut targets, 4.0);
            }
            prop_assert_eq!(bar.hit_count, first);
            let stuck = targets.iter().filter(|t| t.is_stuck).count() as u32;
            prop_assert_eq!(stuck, first);
        }
    }
}
