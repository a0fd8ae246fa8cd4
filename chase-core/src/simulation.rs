use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::round::{self, Herd, RoundOutcome};
use crate::{ChaseConfig, ConfigError, Sheep, Vector2D, Wolf};

/// Entity positions at the end of one round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSnapshot {
    /// 1-based round number
    pub round_no: u32,
    pub wolf_pos: Vector2D,
    /// One entry per sheep in roster order, `None` once the sheep is eaten
    pub sheep_pos: Vec<Option<Vector2D>>,
}

impl RoundSnapshot {
    pub fn alive_count(&self) -> usize {
        self.sheep_pos.iter().filter(|pos| pos.is_some()).count()
    }
}

/// Hook points the driver calls while a simulation runs.
///
/// Every method defaults to doing nothing, so implementors only override what
/// they report on.
pub trait RoundObserver {
    fn on_capture(&mut self, _round_no: u32, _sheep: &Sheep, _wolf: &Wolf) {}

    fn on_pursuit(&mut self, _round_no: u32, _target: &Sheep, _distance: f64, _wolf: &Wolf) {}

    /// Called after the round's snapshot has been recorded and before the next round starts.
    fn on_round(&mut self, _snapshot: &RoundSnapshot, _outcome: &RoundOutcome, _alive: usize) {}

    /// Called when the loop stops early because no sheep is left.
    fn on_all_eaten(&mut self, _round_no: u32) {}
}

impl RoundObserver for () {}

/// Owns the herd, the wolf, the random source and the recorded rounds
pub struct Simulation<R: Rng> {
    herd: Herd,
    wolf: Wolf,
    rng: R,
    snapshots: Vec<RoundSnapshot>,
}

impl Simulation<ChaCha8Rng> {
    /// Same as [`Simulation::from_config`] with a ChaCha8 generator seeded from `seed`.
    pub fn seeded(config: &ChaseConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_config(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(sheep: Vec<Sheep>, wolf: Wolf, rng: R) -> Self {
        Self {
            herd: Herd::new(sheep),
            wolf,
            rng,
            snapshots: Vec::new(),
        }
    }

    /// Validates `config` and scatters `config.sheep_count` sheep uniformly
    /// over the square `[-init_pos_limit, init_pos_limit]²`.
    ///
    /// Starting positions are drawn from `rng` before any round, so a seeded
    /// generator reproduces the whole run.
    pub fn from_config(config: &ChaseConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let limit = config.init_pos_limit;
        let sheep = (0..config.sheep_count)
            .map(|id| {
                let x = rng.gen_range(-limit..=limit);
                let y = rng.gen_range(-limit..=limit);
                Sheep::with_move_dist(id, Vector2D::new(x, y), config.sheep_move_dist)
            })
            .collect();
        let wolf = Wolf::with_move_dist(config.wolf_move_dist);

        log::debug!(
            "created simulation with {} sheep within +/-{} and wolf move distance {}",
            config.sheep_count,
            limit,
            config.wolf_move_dist
        );

        Ok(Self::new(sheep, wolf, rng))
    }

    pub fn herd(&self) -> &Herd {
        &self.herd
    }

    pub fn wolf(&self) -> &Wolf {
        &self.wolf
    }

    pub fn snapshots(&self) -> &[RoundSnapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<RoundSnapshot> {
        self.snapshots
    }

    /// Number of rounds simulated so far
    pub fn rounds_played(&self) -> u32 {
        self.snapshots.len() as u32
    }

    pub fn run(&mut self, rounds: u32) -> &[RoundSnapshot] {
        self.run_with_observer(rounds, &mut ())
    }

    /// Runs up to `rounds` rounds, stopping early once every sheep is eaten.
    ///
    /// Returns the snapshots recorded by this call.
    pub fn run_with_observer<O>(&mut self, rounds: u32, observer: &mut O) -> &[RoundSnapshot]
    where
        O: RoundObserver + ?Sized,
    {
        let first = self.snapshots.len();

        for _ in 0..rounds {
            let round_no = self.rounds_played() + 1;
            if self.herd.is_empty() {
                log::info!("all sheep have been eaten before round {}", round_no);
                observer.on_all_eaten(round_no);
                break;
            }

            let outcome = self.step(round_no, observer);
            let alive = self.herd.alive_count();
            let snapshot = self.record(round_no);
            observer.on_round(snapshot, &outcome, alive);
        }

        &self.snapshots[first..]
    }

    fn step<O>(&mut self, round_no: u32, observer: &mut O) -> RoundOutcome
    where
        O: RoundObserver + ?Sized,
    {
        let outcome = round::advance(&mut self.herd, &mut self.wolf, &mut self.rng);

        let target = self
            .herd
            .sheep()
            .iter()
            .find(|sheep| sheep.id == outcome.sheep_id());
        if let Some(target) = target {
            match outcome {
                RoundOutcome::Captured { .. } => observer.on_capture(round_no, target, &self.wolf),
                RoundOutcome::Pursued { distance, .. } => {
                    observer.on_pursuit(round_no, target, distance, &self.wolf)
                }
            }
        }

        outcome
    }

    fn record(&mut self, round_no: u32) -> &RoundSnapshot {
        let sheep_pos = self
            .herd
            .sheep()
            .iter()
            .map(|sheep| sheep.alive.then_some(sheep.position))
            .collect();
        self.snapshots.push(RoundSnapshot {
            round_no,
            wolf_pos: self.wolf.position,
            sheep_pos,
        });
        &self.snapshots[self.snapshots.len() - 1]
    }
}
