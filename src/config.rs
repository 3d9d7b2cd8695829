use crate::error::{Result, SimError};

/// All simulation constants, fixed at init. `Default` matches the
/// reference scenario: a 640x400 world, 500 ants, colony block at the
/// origin and a food block at (400, 300).
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Number of ants; update order is their index order
    pub ants: usize,
    /// Distance moved per tick
    pub ant_speed: f32,
    /// Heading jitter step in radians
    pub jitter_angle: f32,
    /// Pheromone sensing radius; the scanned square has half-width radius/2
    pub sense_radius: i32,
    /// Fresh pheromone strength ceiling, shared by both channels
    pub max_lifetime: u32,
    /// Ticks between decay passes (1 = every tick)
    pub decay_interval: u32,
    /// Squared distance at which an ant snaps onto its goal cell
    pub snap_dist_sqr: f32,
    /// Steering kicks in when the accumulated vector's squared length
    /// exceeds sense_radius * this fraction
    pub steer_threshold: f32,
    /// Trail cells behind the ant (heading-offset dot below this) are ignored
    pub rear_dot: f32,
    /// Colony block origin (cells)
    pub colony_origin: (usize, usize),
    /// Colony block edge length
    pub colony_size: usize,
    /// Food block origin (cells)
    pub food_origin: (usize, usize),
    /// Food block edge length
    pub food_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
            ants: 500,
            ant_speed: 2.0,
            jitter_angle: 0.15,
            sense_radius: 20,
            max_lifetime: 9999,
            decay_interval: 1,
            snap_dist_sqr: 3.0,
            steer_threshold: 0.5,
            rear_dot: -0.5,
            colony_origin: (0, 0),
            colony_size: 50,
            food_origin: (400, 300),
            food_size: 50,
        }
    }
}

impl SimConfig {
    /// Strength added per reinforcement, 1/20 of the fresh ceiling
    #[inline]
    pub fn reinforce_increment(&self) -> u32 {
        self.max_lifetime / 20
    }

    /// Steering weight of a raw goal cell; always dominates trail cells
    #[inline]
    pub fn goal_weight(&self) -> f32 {
        (self.max_lifetime * self.sense_radius as u32) as f32
    }

    /// Check every value against its documented range. The simulation core
    /// assumes a validated config and performs no range checks of its own.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.decay_interval == 0 {
            return Err(SimError::InvalidConfig(
                "decay interval must be at least 1".to_string(),
            ));
        }
        if self.max_lifetime < 20 {
            return Err(SimError::InvalidConfig(format!(
                "max lifetime {} leaves a zero reinforcement increment",
                self.max_lifetime
            )));
        }
        if self.sense_radius < 2 {
            return Err(SimError::InvalidConfig(format!(
                "sense radius {} is below the minimum of 2",
                self.sense_radius
            )));
        }
        if self.ant_speed <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "ant speed {} must be positive",
                self.ant_speed
            )));
        }
        self.check_region("colony", self.colony_origin, self.colony_size)?;
        self.check_region("food", self.food_origin, self.food_size)?;
        Ok(())
    }

    fn check_region(&self, name: &str, origin: (usize, usize), size: usize) -> Result<()> {
        if origin.0 + size > self.width || origin.1 + size > self.height {
            return Err(SimError::InvalidConfig(format!(
                "{} region {}x{} at ({}, {}) exceeds the {}x{} grid",
                name, size, size, origin.0, origin.1, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_reinforce_increment_is_a_twentieth() {
        let config = SimConfig::default();
        assert_eq!(config.reinforce_increment(), 499);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = SimConfig {
            width: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_decay_interval_rejected() {
        let config = SimConfig {
            decay_interval: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_bounds_food_region_rejected() {
        let config = SimConfig {
            food_origin: (620, 300),
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("food region"));
    }

    #[test]
    fn test_tiny_lifetime_rejected() {
        let config = SimConfig {
            max_lifetime: 19,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
