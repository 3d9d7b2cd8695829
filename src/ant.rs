use crate::vec2::Vec2;

/// One foraging agent: continuous position, unit heading, carry flag
#[derive(Clone, Debug)]
pub struct Ant {
    pub position: Vec2,
    pub direction: Vec2,
    pub has_food: bool,
}

impl Ant {
    /// Create an ant at the given position, heading diagonally
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            direction: Vec2::new(1.0, 1.0).normalized(),
            has_food: false,
        }
    }

    /// Spawn the whole population at the colony origin. Vec order is the
    /// per-tick update order and must stay fixed for the lifetime of the
    /// simulation.
    pub fn spawn(count: usize, origin: Vec2) -> Vec<Ant> {
        (0..count).map(|_| Ant::new(origin)).collect()
    }

    /// Turn around on the spot; used right after pickup and drop-off
    #[inline]
    pub fn reverse(&mut self) {
        self.direction = -self.direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(Vec2::new(3.0, 4.0));

        assert_eq!(ant.position, Vec2::new(3.0, 4.0));
        assert!(!ant.has_food);
        assert!((ant.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_spawn_places_all_ants_at_origin() {
        let ants = Ant::spawn(10, Vec2::ZERO);

        assert_eq!(ants.len(), 10);
        for ant in &ants {
            assert_eq!(ant.position, Vec2::ZERO);
            assert!(!ant.has_food);
        }
    }

    #[test]
    fn test_reverse_negates_heading() {
        let mut ant = Ant::new(Vec2::ZERO);
        let before = ant.direction;

        ant.reverse();
        assert_eq!(ant.direction, -before);

        ant.reverse();
        assert_eq!(ant.direction, before);
    }
}
