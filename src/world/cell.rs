/// Pheromone channel, named by what the trail guides toward.
///
/// Carrying ants deposit `ToFood` (their path leads back to where food
/// was found) and follow `ToColony`; foodless ants do the opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    ToFood,
    ToColony,
}

/// One grid cell. Kinds are mutually exclusive; a pheromone carries its
/// remaining strength explicitly instead of the original's shared integer
/// range, so decay can never bleed one channel into the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    Colony,
    Wall,
    Pheromone { channel: Channel, strength: u32 },
}

impl Cell {
    /// True for the trail cells an ant in the given carry state steers by
    #[inline]
    pub fn is_trail_for(self, has_food: bool) -> bool {
        match self {
            Cell::Pheromone { channel, .. } => {
                channel == if has_food { Channel::ToColony } else { Channel::ToFood }
            }
            _ => false,
        }
    }

    /// The cell kind an ant in the given carry state is trying to reach
    #[inline]
    pub fn goal_for(has_food: bool) -> Cell {
        if has_food {
            Cell::Colony
        } else {
            Cell::Food
        }
    }
}
