use crate::config::SimConfig;
use crate::world::cell::{Cell, Channel};

/// Fixed-size cell grid; the only mutable shared state of the simulation
#[derive(Clone, Debug)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    /// Fresh strength ceiling shared by both pheromone channels
    max_lifetime: u32,
    cells: Vec<Cell>,
}

impl WorldGrid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize, max_lifetime: u32) -> Self {
        Self {
            width,
            height,
            max_lifetime,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Build the scenario grid: empty world with the food and colony
    /// blocks painted once. The config must already be validated.
    pub fn from_config(config: &SimConfig) -> Self {
        let mut grid = Self::new(config.width, config.height, config.max_lifetime);
        grid.paint_region(
            config.food_origin.0,
            config.food_origin.1,
            config.food_size,
            config.food_size,
            Cell::Food,
        );
        grid.paint_region(
            config.colony_origin.0,
            config.colony_origin.1,
            config.colony_size,
            config.colony_size,
            Cell::Colony,
        );
        grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Overwrite a rectangular block unconditionally; init-time only
    pub fn paint_region(&mut self, x0: usize, y0: usize, size_x: usize, size_y: usize, value: Cell) {
        for y in y0..y0 + size_y {
            for x in x0..x0 + size_x {
                let idx = self.index(x, y);
                self.cells[idx] = value;
            }
        }
    }

    /// Bounds-checked read
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Unchecked read for the sensing hot path
    ///
    /// # Safety
    /// The caller must ensure `x < width` and `y < height`
    #[inline(always)]
    pub unsafe fn cell_unchecked(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        *self.cells.get_unchecked(y * self.width + x)
    }

    /// Write a cell; coordinates out of range are a caller bug
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// One decay pass: every pheromone loses 1 strength and collapses to
    /// `Empty` at 0, whatever its channel. Other cell kinds are untouched.
    pub fn decay_tick(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Pheromone { channel, strength } = *cell {
                *cell = if strength <= 1 {
                    Cell::Empty
                } else {
                    Cell::Pheromone {
                        channel,
                        strength: strength - 1,
                    }
                };
            }
        }
    }

    /// Lay or strengthen trail at the cell an ant is standing on.
    ///
    /// A same-channel trail gains a fixed increment, clamped to the fresh
    /// ceiling. An empty cell or a trail of the other channel is replaced
    /// by a fresh deposit at one increment. Food, colony and wall cells
    /// never take pheromone.
    pub fn reinforce(&mut self, x: usize, y: usize, channel: Channel) {
        let increment = self.max_lifetime / 20;
        let idx = self.index(x, y);
        match self.cells[idx] {
            Cell::Food | Cell::Colony | Cell::Wall => {}
            Cell::Pheromone {
                channel: existing,
                strength,
            } if existing == channel => {
                self.cells[idx] = Cell::Pheromone {
                    channel,
                    strength: (strength + increment).min(self.max_lifetime),
                };
            }
            _ => {
                self.cells[idx] = Cell::Pheromone {
                    channel,
                    strength: increment,
                };
            }
        }
    }

    /// Food cells left on the grid
    pub fn food_remaining(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Food).count()
    }
}
