use std::fmt;

pub mod config;
pub mod round;
pub mod simulation;

pub use config::{ChaseConfig, ConfigError};
pub use round::{Herd, RoundOutcome};
pub use simulation::{RoundObserver, RoundSnapshot, Simulation};

/// Default distance a sheep wanders per round
pub const DEFAULT_SHEEP_MOVE_DIST: f64 = 0.5;

/// Default distance the wolf covers per round
pub const DEFAULT_WOLF_MOVE_DIST: f64 = 1.0;

/// A 2D vector used for entity positions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Vector2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Mutable access to one coordinate, 0 for x and 1 for y
    pub fn axis_mut(&mut self, axis: usize) -> &mut f64 {
        match axis {
            0 => &mut self.x,
            _ => &mut self.y,
        }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl std::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl std::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// A single sheep wandering the pasture
#[derive(Debug, Clone, PartialEq)]
pub struct Sheep {
    pub id: u32,
    pub position: Vector2D,
    pub move_dist: f64,
    pub alive: bool,
}

impl Sheep {
    pub fn new(id: u32, position: Vector2D) -> Self {
        Self::with_move_dist(id, position, DEFAULT_SHEEP_MOVE_DIST)
    }

    /// Positivity of `move_dist` is checked by [`ChaseConfig::validate`], not here.
    pub fn with_move_dist(id: u32, position: Vector2D, move_dist: f64) -> Self {
        Self {
            id,
            position,
            move_dist,
            alive: true,
        }
    }
}

impl fmt::Display for Sheep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.alive {
            "Alive sheep,"
        } else {
            "Dead sheep, eaten"
        };
        write!(
            f,
            "{} at position [{}, {}]",
            status, self.position.x, self.position.y
        )
    }
}

/// The single pursuer of a simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Wolf {
    pub position: Vector2D,
    pub move_dist: f64,
    pub eaten_count: u32,
}

impl Wolf {
    pub fn new() -> Self {
        Self::with_move_dist(DEFAULT_WOLF_MOVE_DIST)
    }

    pub fn with_move_dist(move_dist: f64) -> Self {
        Self {
            position: Vector2D::zero(),
            move_dist,
            eaten_count: 0,
        }
    }
}

impl Default for Wolf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Wolf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wolf at position: [{}, {}] with {} sheep eaten",
            self.position.x, self.position.y, self.eaten_count
        )
    }
}
