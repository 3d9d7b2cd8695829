use clap::Parser;

/// CLI arguments for the ant foraging simulation
#[derive(Parser, Debug)]
#[command(name = "ant_foraging", about = "🐜 Pheromone-trail foraging simulator")]
pub struct Args {
    /// Number of ants
    #[arg(short = 'n', long = "ants", default_value_t = 500)]
    pub ants: usize,

    /// Ticks to simulate
    #[arg(short = 't', long, default_value_t = 1_000)]
    pub ticks: u64,

    /// Ticks between pheromone decay passes
    #[arg(long, default_value_t = 1)]
    pub decay_interval: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render pheromone trails into the frame dump
    #[arg(long, default_value_t = false)]
    pub show_pheromone: bool,

    /// Write the final frame to this PPM file
    #[arg(long)]
    pub frame_out: Option<String>,

    /// Suppress delivery logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}
