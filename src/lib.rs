//! # Ant Foraging
//!
//! A pheromone-trail foraging simulation on a discrete 2D grid.
//!
//! Ants wander out from their colony, pick up food, and lay decaying
//! pheromone trails that bias later ants toward productive paths — an
//! emergent routing algorithm with no central coordinator. The library
//! holds the full simulation core; presentation is reduced to a color
//! bridge in [`render`].

pub mod ant;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod simulation;
pub mod vec2;
pub mod world;

pub use ant::Ant;
pub use cli::Args;
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use simulation::SimulationEngine;
pub use vec2::Vec2;
pub use world::{Cell, Channel, WorldGrid};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Cell, Channel, Result, SimConfig, SimError, SimulationEngine, Vec2, WorldGrid,
    };
}
