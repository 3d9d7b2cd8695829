//! Color bridge to the external presenter: pure cell-to-color mapping,
//! full-frame RGBA assembly and a PPM export used by the headless binary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ant::Ant;
use crate::error::Result;
use crate::world::{Cell, Channel, WorldGrid};

/// 8-bit RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale the RGB components by `factor` in [0, 1]; alpha is kept
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
            a: self.a,
        }
    }
}

pub const BACKGROUND: Color = Color { r: 0, g: 0, b: 0, a: 0 };
pub const FOOD_COLOR: Color = Color::rgb(230, 41, 55);
pub const COLONY_COLOR: Color = Color::rgb(0, 158, 47);
pub const WALL_COLOR: Color = Color::rgb(130, 130, 130);
pub const TRAIL_HIDDEN: Color = Color::rgb(0, 0, 0);
pub const TRAIL_TO_FOOD: Color = Color::rgb(255, 161, 0);
pub const TRAIL_TO_COLONY: Color = Color::rgb(200, 122, 255);
pub const ANT_COLOR: Color = Color::rgb(0, 121, 241);
pub const ANT_FOOD_COLOR: Color = Color::rgb(0, 228, 48);

/// Map a cell to its display color. Trail brightness tracks remaining
/// strength; with the toggle off trails render as the neutral hidden color.
pub fn cell_color(cell: Cell, show_pheromone: bool, max_lifetime: u32) -> Color {
    match cell {
        Cell::Empty => BACKGROUND,
        Cell::Food => FOOD_COLOR,
        Cell::Colony => COLONY_COLOR,
        Cell::Pheromone { channel, strength } => {
            if !show_pheromone {
                return TRAIL_HIDDEN;
            }
            let base = match channel {
                Channel::ToFood => TRAIL_TO_FOOD,
                Channel::ToColony => TRAIL_TO_COLONY,
            };
            base.scaled(strength as f32 / max_lifetime as f32)
        }
        Cell::Wall => WALL_COLOR,
    }
}

/// Fill `buf` with a width*height*4 RGBA frame: cells first, then one
/// pixel per ant at its truncated position
pub fn render_frame(
    world: &WorldGrid,
    ants: &[Ant],
    show_pheromone: bool,
    max_lifetime: u32,
    buf: &mut Vec<u8>,
) {
    buf.clear();
    buf.reserve(world.width() * world.height() * 4);
    for y in 0..world.height() {
        for x in 0..world.width() {
            let color = cell_color(
                world.cell(x, y).unwrap_or(Cell::Empty),
                show_pheromone,
                max_lifetime,
            );
            buf.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }
    for ant in ants {
        let x = ant.position.x as usize;
        let y = ant.position.y as usize;
        let color = if ant.has_food { ANT_FOOD_COLOR } else { ANT_COLOR };
        let idx = (y * world.width() + x) * 4;
        buf[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }
}

/// Write the current frame as a binary PPM (P6), alpha composited over black
pub fn write_ppm(
    path: &Path,
    world: &WorldGrid,
    ants: &[Ant],
    show_pheromone: bool,
    max_lifetime: u32,
) -> Result<()> {
    let mut frame = Vec::new();
    render_frame(world, ants, show_pheromone, max_lifetime, &mut frame);

    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", world.width(), world.height())?;
    for pixel in frame.chunks_exact(4) {
        let alpha = pixel[3] as u16;
        out.write_all(&[
            (pixel[0] as u16 * alpha / 255) as u8,
            (pixel[1] as u16 * alpha / 255) as u8,
            (pixel[2] as u16 * alpha / 255) as u8,
        ])?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2::Vec2;

    const LIFETIME: u32 = 9999;

    #[test]
    fn test_static_cell_colors() {
        assert_eq!(cell_color(Cell::Empty, true, LIFETIME), BACKGROUND);
        assert_eq!(cell_color(Cell::Food, true, LIFETIME), FOOD_COLOR);
        assert_eq!(cell_color(Cell::Colony, true, LIFETIME), COLONY_COLOR);
        assert_eq!(cell_color(Cell::Wall, true, LIFETIME), WALL_COLOR);
    }

    #[test]
    fn test_hidden_trail_color_ignores_strength() {
        for strength in [1, 500, LIFETIME] {
            let cell = Cell::Pheromone {
                channel: Channel::ToFood,
                strength,
            };
            assert_eq!(cell_color(cell, false, LIFETIME), TRAIL_HIDDEN);
        }
    }

    #[test]
    fn test_trail_brightness_tracks_strength() {
        let full = cell_color(
            Cell::Pheromone {
                channel: Channel::ToFood,
                strength: LIFETIME,
            },
            true,
            LIFETIME,
        );
        let faint = cell_color(
            Cell::Pheromone {
                channel: Channel::ToFood,
                strength: 1,
            },
            true,
            LIFETIME,
        );

        assert_eq!(full, TRAIL_TO_FOOD);
        assert!(faint.r < TRAIL_TO_FOOD.r);
        assert!(faint.g < TRAIL_TO_FOOD.g);
    }

    #[test]
    fn test_channels_use_distinct_hues() {
        let food = cell_color(
            Cell::Pheromone {
                channel: Channel::ToFood,
                strength: LIFETIME,
            },
            true,
            LIFETIME,
        );
        let colony = cell_color(
            Cell::Pheromone {
                channel: Channel::ToColony,
                strength: LIFETIME,
            },
            true,
            LIFETIME,
        );
        assert_ne!(food, colony);
    }

    #[test]
    fn test_render_frame_size_and_ant_overlay() {
        let mut world = WorldGrid::new(8, 8, LIFETIME);
        world.set(2, 2, Cell::Food);
        let mut ant = Ant::new(Vec2::new(5.0, 5.0));
        ant.has_food = true;

        let mut buf = Vec::new();
        render_frame(&world, &[ant], true, LIFETIME, &mut buf);

        assert_eq!(buf.len(), 8 * 8 * 4);

        let food_idx = (2 * 8 + 2) * 4;
        assert_eq!(buf[food_idx], FOOD_COLOR.r);

        let ant_idx = (5 * 8 + 5) * 4;
        assert_eq!(
            &buf[ant_idx..ant_idx + 4],
            &[ANT_FOOD_COLOR.r, ANT_FOOD_COLOR.g, ANT_FOOD_COLOR.b, 255]
        );
    }

    #[test]
    fn test_write_ppm_header_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.ppm");
        let world = WorldGrid::new(4, 3, LIFETIME);

        write_ppm(&path, &world, &[], false, LIFETIME).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n4 3\n255\n"));
        assert_eq!(bytes.len(), b"P6\n4 3\n255\n".len() + 4 * 3 * 3);
    }
}
