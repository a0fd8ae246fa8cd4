use rand::Rng;

use crate::{Sheep, Vector2D, Wolf};

/// Result of a single round for the sheep the wolf targeted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundOutcome {
    /// The nearest sheep was within reach and got eaten
    Captured { sheep_id: u32, distance: f64 },
    /// The wolf moved its full distance toward the nearest sheep
    Pursued { sheep_id: u32, distance: f64 },
}

impl RoundOutcome {
    pub fn sheep_id(&self) -> u32 {
        match *self {
            RoundOutcome::Captured { sheep_id, .. } | RoundOutcome::Pursued { sheep_id, .. } => {
                sheep_id
            }
        }
    }

    pub fn distance(&self) -> f64 {
        match *self {
            RoundOutcome::Captured { distance, .. } | RoundOutcome::Pursued { distance, .. } => {
                distance
            }
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, RoundOutcome::Captured { .. })
    }
}

/// The full sheep roster plus the indices of the sheep still alive.
///
/// `alive` holds roster indices in the order the sheep were added and only
/// ever shrinks. It always equals the set of roster entries with `alive == true`.
#[derive(Debug, Clone)]
pub struct Herd {
    sheep: Vec<Sheep>,
    alive: Vec<usize>,
}

impl Herd {
    pub fn new(sheep: Vec<Sheep>) -> Self {
        let alive = sheep
            .iter()
            .enumerate()
            .filter(|(_, s)| s.alive)
            .map(|(index, _)| index)
            .collect();
        Self { sheep, alive }
    }

    /// The whole roster, dead sheep included, in creation order
    pub fn sheep(&self) -> &[Sheep] {
        &self.sheep
    }

    pub fn alive_sheep(&self) -> impl Iterator<Item = &Sheep> + '_ {
        self.alive.iter().map(move |&index| &self.sheep[index])
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Moves every alive sheep one step along a random axis in a random direction.
    ///
    /// Draws exactly two values per alive sheep, axis first, then sign.
    pub fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for &index in &self.alive {
            let sheep = &mut self.sheep[index];
            let axis = rng.gen_range(0..2);
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            *sheep.position.axis_mut(axis) += sign * sheep.move_dist;
        }
    }

    /// Finds the alive sheep closest to `point`.
    ///
    /// Returns the roster index and the distance. On an exact tie the sheep
    /// that comes first in the alive set wins.
    pub fn nearest_to(&self, point: &Vector2D) -> Option<(usize, f64)> {
        let mut nearest: Option<(usize, f64)> = None;
        for &index in &self.alive {
            let distance = self.sheep[index].position.distance(point);
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((index, distance)),
            }
        }
        nearest
    }

    /// Marks the sheep at roster `index` as eaten and drops it from the alive set.
    fn remove(&mut self, index: usize) {
        self.sheep[index].alive = false;
        self.alive.retain(|&alive_index| alive_index != index);
    }
}

/// Snaps the wolf onto the sheep and takes it out of play.
pub fn capture(herd: &mut Herd, wolf: &mut Wolf, index: usize) {
    wolf.position = herd.sheep[index].position;
    herd.remove(index);
    wolf.eaten_count += 1;
}

/// Moves the wolf exactly `move_dist` along the line toward `target`.
///
/// `distance` must be the current wolf-to-target distance and strictly positive.
pub fn pursue(wolf: &mut Wolf, target: Vector2D, distance: f64) {
    debug_assert!(distance > 0.0, "pursuit needs a positive distance");
    let step = (target - wolf.position) * (wolf.move_dist / distance);
    wolf.position += step;
}

/// Advances the herd and the wolf by exactly one round.
///
/// Order is fixed: wander, select the nearest sheep, then capture it if it is
/// strictly closer than the wolf's move distance or pursue it otherwise.
///
/// # Panics
///
/// Panics when no sheep is alive. The driver never calls it in that state.
pub fn advance<R: Rng + ?Sized>(herd: &mut Herd, wolf: &mut Wolf, rng: &mut R) -> RoundOutcome {
    assert!(!herd.is_empty(), "round engine invoked with no alive sheep");

    herd.wander(rng);

    let Some((index, distance)) = herd.nearest_to(&wolf.position) else {
        unreachable!("alive set emptied while wandering");
    };
    let sheep_id = herd.sheep[index].id;

    if distance < wolf.move_dist {
        capture(herd, wolf, index);
        log::debug!(
            "wolf ate sheep {} at distance {:.3}, {} sheep left",
            sheep_id,
            distance,
            herd.alive_count()
        );
        RoundOutcome::Captured { sheep_id, distance }
    } else {
        pursue(wolf, herd.sheep[index].position, distance);
        log::debug!(
            "wolf chased sheep {} at distance {:.3} to [{:.3}, {:.3}]",
            sheep_id,
            distance,
            wolf.position.x,
            wolf.position.y
        );
        RoundOutcome::Pursued { sheep_id, distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn herd_at(positions: &[(f64, f64)]) -> Herd {
        Herd::new(
            positions
                .iter()
                .enumerate()
                .map(|(id, &(x, y))| Sheep::new(id as u32, Vector2D::new(x, y)))
                .collect(),
        )
    }

    #[test]
    fn test_herd_tracks_alive_set() {
        let mut sheep = vec![
            Sheep::new(0, Vector2D::zero()),
            Sheep::new(1, Vector2D::zero()),
        ];
        sheep[0].alive = false;
        let herd = Herd::new(sheep);
        assert_eq!(herd.alive_count(), 1);
        assert_eq!(herd.alive_sheep().next().map(|s| s.id), Some(1));
        assert_eq!(herd.sheep().len(), 2);
    }

    #[test]
    fn test_wander_moves_one_axis_by_move_dist() {
        let mut herd = Herd::new(vec![
            Sheep::with_move_dist(0, Vector2D::new(1.0, 1.0), 0.5),
            Sheep::with_move_dist(1, Vector2D::new(-3.0, 2.0), 0.25),
        ]);
        let before: Vec<_> = herd.sheep().iter().map(|s| s.position).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let start: Vec<_> = herd.sheep().iter().map(|s| s.position).collect();
            herd.wander(&mut rng);
            for (sheep, old) in herd.sheep().iter().zip(start.iter()) {
                let dx = (sheep.position.x - old.x).abs();
                let dy = (sheep.position.y - old.y).abs();
                let moved_x = dx == sheep.move_dist && dy == 0.0;
                let moved_y = dy == sheep.move_dist && dx == 0.0;
                assert!(moved_x || moved_y, "sheep {} moved ({}, {})", sheep.id, dx, dy);
            }
        }

        let after: Vec<_> = herd.sheep().iter().map(|s| s.position).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_wander_skips_dead_sheep() {
        let mut herd = herd_at(&[(0.5, 0.0), (5.0, 5.0)]);
        let mut wolf = Wolf::new();
        capture(&mut herd, &mut wolf, 0);
        let frozen = herd.sheep()[0].position;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        herd.wander(&mut rng);
        assert_eq!(herd.sheep()[0].position, frozen);
    }

    #[test]
    fn test_nearest_prefers_first_on_tie() {
        let herd = herd_at(&[(3.0, 0.0), (0.0, 3.0), (-3.0, 0.0)]);
        let (index, distance) = herd.nearest_to(&Vector2D::zero()).unwrap();
        assert_eq!(index, 0);
        assert_eq!(distance, 3.0);
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let herd = herd_at(&[(6.0, 0.0), (0.0, -2.0), (4.0, 4.0)]);
        let (index, distance) = herd.nearest_to(&Vector2D::zero()).unwrap();
        assert_eq!(index, 1);
        assert_eq!(distance, 2.0);
    }

    #[test]
    fn test_nearest_on_empty_herd() {
        let herd = Herd::new(Vec::new());
        assert!(herd.nearest_to(&Vector2D::zero()).is_none());
    }

    #[test]
    fn test_capture_snaps_wolf_to_sheep() {
        let mut herd = herd_at(&[(0.25, -0.5), (8.0, 8.0)]);
        let mut wolf = Wolf::new();

        capture(&mut herd, &mut wolf, 0);

        assert_eq!(wolf.position, Vector2D::new(0.25, -0.5));
        assert_eq!(wolf.eaten_count, 1);
        assert!(!herd.sheep()[0].alive);
        assert_eq!(herd.sheep()[0].position, Vector2D::new(0.25, -0.5));
        assert_eq!(herd.alive_count(), 1);
        assert!(herd.alive_sheep().all(|s| s.id == 1));
    }

    #[test]
    fn test_pursue_moves_exactly_move_dist() {
        let mut wolf = Wolf::with_move_dist(1.0);
        let target = Vector2D::new(3.0, 4.0);
        pursue(&mut wolf, target, 5.0);

        assert!((wolf.position.x - 0.6).abs() < 1e-12);
        assert!((wolf.position.y - 0.8).abs() < 1e-12);
        assert!((wolf.position.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_advance_captures_close_sheep() {
        let mut herd = herd_at(&[(0.3, 0.0)]);
        let mut wolf = Wolf::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let outcome = advance(&mut herd, &mut wolf, &mut rng);

        assert!(outcome.is_capture());
        assert_eq!(outcome.sheep_id(), 0);
        assert!(outcome.distance() < wolf.move_dist);
        assert_eq!(wolf.eaten_count, 1);
        assert!(herd.is_empty());
        assert_eq!(wolf.position, herd.sheep()[0].position);
    }

    #[test]
    fn test_advance_pursues_distant_sheep() {
        let mut herd = herd_at(&[(10.0, 0.0)]);
        let mut wolf = Wolf::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let outcome = advance(&mut herd, &mut wolf, &mut rng);

        assert!(!outcome.is_capture());
        assert_eq!(wolf.eaten_count, 0);
        assert_eq!(herd.alive_count(), 1);
        assert!((wolf.position.magnitude() - wolf.move_dist).abs() < 1e-9);
        let sheep = herd.sheep()[0].position;
        assert!((wolf.position.distance(&sheep) - (outcome.distance() - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_advance_at_exact_reach_pursues() {
        // A standing sheep exactly one wolf step away is reached but not eaten.
        let mut herd = Herd::new(vec![Sheep::with_move_dist(
            0,
            Vector2D::new(0.5, 0.0),
            0.0,
        )]);
        let mut wolf = Wolf::with_move_dist(0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = advance(&mut herd, &mut wolf, &mut rng);

        assert_eq!(outcome.distance(), 0.5);
        assert!(!outcome.is_capture());
        assert_eq!(wolf.eaten_count, 0);
        assert_eq!(herd.alive_count(), 1);
        assert_eq!(wolf.position, herd.sheep()[0].position);
    }

    #[test]
    fn test_advance_wandering_onto_exact_reach_pursues() {
        let mut exact_hits = 0;
        for seed in 0..16 {
            let mut herd = herd_at(&[(0.5, 0.5)]);
            let mut wolf = Wolf::with_move_dist(0.5);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let outcome = advance(&mut herd, &mut wolf, &mut rng);

            assert!(!outcome.is_capture(), "seed {seed}");
            assert_eq!(herd.alive_count(), 1);
            if outcome.distance() == 0.5 {
                exact_hits += 1;
                assert_eq!(wolf.position, herd.sheep()[0].position, "seed {seed}");
            }
        }
        assert!(exact_hits > 0);
    }

    #[test]
    #[should_panic(expected = "no alive sheep")]
    fn test_advance_on_empty_herd_panics() {
        let mut herd = herd_at(&[(0.3, 0.0)]);
        let mut wolf = Wolf::new();
        capture(&mut herd, &mut wolf, 0);

        advance(&mut herd, &mut wolf, &mut ChaCha8Rng::seed_from_u64(0));
    }
}
