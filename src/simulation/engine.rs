use crate::ant::Ant;
use crate::cli::Args;
use crate::config::SimConfig;
use crate::vec2::Vec2;
use crate::world::{Cell, Channel, WorldGrid};
use colored::Colorize;
use std::time::Instant;

/// Per-tick bookkeeping reported back to the host
#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    pub pickups: u32,
    pub deliveries: u32,
}

/// Orchestrates one simulation tick: pheromone decay, then every ant in
/// fixed index order. The sequential in-place pass is load-bearing — an
/// ant's deposits and pickups are visible to the ants after it within the
/// same tick, which is what lets a single pass both sense and lay trail.
pub struct SimulationEngine {
    config: SimConfig,
    decay_counter: u32,
    ticks_run: u64,
    food_collected: u64,
}

impl SimulationEngine {
    /// Create a new engine around a validated config
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            decay_counter: 0,
            ticks_run: 0,
            food_collected: 0,
        }
    }

    /// Total food delivered to the colony; only ever grows
    #[inline]
    pub fn food_collected(&self) -> u64 {
        self.food_collected
    }

    #[inline]
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    /// Advance the simulation by exactly one tick
    pub fn tick(
        &mut self,
        world: &mut WorldGrid,
        ants: &mut [Ant],
        rng: &mut fastrand::Rng,
    ) -> TickStats {
        self.ticks_run += 1;
        self.decay_counter += 1;
        let decay_now = self.decay_counter >= self.config.decay_interval;
        if decay_now {
            self.decay_counter = 0;
            world.decay_tick();
        }

        let mut stats = TickStats::default();
        for ant in ants.iter_mut() {
            self.update_ant(world, ant, rng, decay_now, &mut stats);
        }
        stats
    }

    fn update_ant(
        &mut self,
        world: &mut WorldGrid,
        ant: &mut Ant,
        rng: &mut fastrand::Rng,
        decay_now: bool,
        stats: &mut TickStats,
    ) {
        // Trail laying happens on the same ticks the field decays, so a
        // standing ant holds its cell at equilibrium instead of ratcheting
        if decay_now {
            let channel = if ant.has_food {
                Channel::ToFood
            } else {
                Channel::ToColony
            };
            world.reinforce(ant.position.x as usize, ant.position.y as usize, channel);
        }

        // Biased random walk: half the ticks, turn by -1/0/+1 jitter steps
        if rng.bool() {
            let step = rng.i32(-1..=1) as f32 * self.config.jitter_angle;
            ant.direction = ant.direction.rotated(step).normalized();
        }

        self.sense(world, ant);

        // Pickup / drop-off at the (possibly snapped) current cell
        let cx = ant.position.x as usize;
        let cy = ant.position.y as usize;
        match world.cell(cx, cy) {
            Some(Cell::Food) if !ant.has_food => {
                ant.has_food = true;
                world.set(cx, cy, Cell::Empty);
                ant.reverse();
                stats.pickups += 1;
            }
            Some(Cell::Colony) if ant.has_food => {
                ant.has_food = false;
                self.food_collected += 1;
                ant.reverse();
                stats.deliveries += 1;
            }
            _ => {}
        }

        // Move, clamp, and reflect off the boundaries axis by axis
        let max = Vec2::new(
            (world.width() - 1) as f32,
            (world.height() - 1) as f32,
        );
        ant.position =
            (ant.position + ant.direction * self.config.ant_speed).clamped(Vec2::ZERO, max);
        if ant.position.x <= 0.0 || ant.position.x >= max.x {
            ant.direction.x = -ant.direction.x;
        }
        if ant.position.y <= 0.0 || ant.position.y >= max.y {
            ant.direction.y = -ant.direction.y;
        }
    }

    /// Scan the square sensing neighborhood around the ant, snapping onto
    /// a goal cell in grabbing distance or accumulating a strength-weighted
    /// steering vector from relevant trail and goal cells.
    fn sense(&self, world: &WorldGrid, ant: &mut Ant) {
        let half = self.config.sense_radius / 2;
        let px = ant.position.x as i32;
        let py = ant.position.y as i32;
        let goal = Cell::goal_for(ant.has_food);

        let mut acc = Vec2::ZERO;
        'scan: for x in (px - half)..(px + half) {
            if x < 0 || x >= world.width() as i32 {
                continue;
            }
            for y in (py - half)..(py + half) {
                if y < 0 || y >= world.height() as i32 {
                    continue;
                }
                // Invariant: x and y are in range here
                let cell = unsafe { world.cell_unchecked(x as usize, y as usize) };
                let offset = Vec2::new(x as f32, y as f32) - ant.position;

                // Snap-grab: continuous motion never lines up exactly with
                // a grid cell, so close goals capture the ant outright
                if cell == goal && offset.length_sqr() <= self.config.snap_dist_sqr {
                    ant.position = Vec2::new(x as f32, y as f32);
                    break 'scan;
                }

                if (x == px && y == py) || cell == Cell::Empty {
                    continue;
                }
                let weight = match cell {
                    Cell::Food | Cell::Colony if cell == goal => self.config.goal_weight(),
                    Cell::Pheromone { strength, .. } if cell.is_trail_for(ant.has_food) => {
                        strength as f32
                    }
                    _ => continue,
                };
                // Ignore the rear half-plane so ants don't double back
                if ant.direction.dot(offset) < self.config.rear_dot {
                    continue;
                }
                acc += offset.normalized() * weight;
            }
        }

        if acc.length_sqr() > self.config.sense_radius as f32 * self.config.steer_threshold {
            ant.direction = (ant.direction + acc.normalized()).normalized();
        }
    }

    /// Run the full simulation: `args.ticks` ticks with event logging
    pub fn run_simulation(
        &mut self,
        world: &mut WorldGrid,
        ants: &mut [Ant],
        args: &Args,
        rng: &mut fastrand::Rng,
    ) -> std::time::Duration {
        let sim_start = Instant::now();

        for tick in 0..args.ticks {
            let stats = self.tick(world, ants, rng);
            if stats.deliveries > 0 {
                self.log_deliveries(args, tick, stats.deliveries);
            }
        }

        sim_start.elapsed()
    }

    /// Log food deliveries for one tick
    #[inline]
    fn log_deliveries(&self, args: &Args, tick: u64, deliveries: u32) {
        if args.suppress_events {
            return;
        }
        println!(
            "{} {} {}",
            "🍎".green(),
            format!("tick {}", tick).dimmed(),
            format!("{} delivered (total {})", deliveries, self.food_collected).yellow(),
        );
    }

    /// Print simulation summary
    pub fn print_summary(&self, world: &WorldGrid, args: &Args, simulation_time: std::time::Duration) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ticks={}", self.ticks_run).cyan(),
            format!("ants={}", args.ants).cyan(),
            format!("food_collected={}", self.food_collected).cyan(),
            format!("food_remaining={}", world.food_remaining()).cyan(),
        );
    }
}
