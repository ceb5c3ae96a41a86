use clap::Parser;
use forest_fire_core::{
    spread_probability_at, wind_influence_grid, CellState, FireSimulation, PopulationStats,
    SimulationConfig, SimulationParameters,
};
use std::thread;
use std::time::Duration;

/// Forest-fire simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire-demo")]
#[command(about = "Wind-driven forest-fire cellular automaton", long_about = None)]
struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 70)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 100)]
    cols: usize,

    /// Number of generations to simulate
    #[arg(short, long, default_value_t = 200)]
    steps: u64,

    /// Wind speed (0-1)
    #[arg(short, long, default_value_t = 0.0)]
    wind_speed: f64,

    /// Wind direction in degrees (0 = up, clockwise)
    #[arg(long, default_value_t = 0.0)]
    wind_direction: f64,

    /// Per-step probability that ash regrows into a tree
    #[arg(long, default_value_t = SimulationParameters::DEFAULT_TREE_REGROWTH)]
    regrowth: f64,

    /// Per-step probability that an untouched tree ignites
    #[arg(long, default_value_t = SimulationParameters::DEFAULT_SPONTANEOUS_IGNITION)]
    ignition: f64,

    /// RNG seed (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Tick interval in milliseconds (interactive UI cadence is 500; 0 runs free)
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Report statistics every N steps (0 = final summary only)
    #[arg(short, long, default_value_t = 10)]
    report_interval: u64,

    /// Print an ASCII rendering of the grid with each report
    #[arg(long)]
    render: bool,
}

/// Caller-side time series of population percentages, one entry per step.
#[derive(Debug, Default)]
struct HistoricalSeries {
    steps: Vec<u64>,
    ash: Vec<f64>,
    tree: Vec<f64>,
    fire: Vec<f64>,
}

impl HistoricalSeries {
    fn push(&mut self, step: u64, stats: &PopulationStats) {
        self.steps.push(step);
        self.ash.push(stats.ash);
        self.tree.push(stats.tree);
        self.fire.push(stats.fire);
    }

    fn sample_count(&self) -> usize {
        self.steps.len()
    }

    fn average_fire(&self) -> f64 {
        if self.fire.is_empty() {
            return 0.0;
        }
        self.fire.iter().sum::<f64>() / self.fire.len() as f64
    }

    fn last_entry(&self) -> Option<(u64, f64, f64, f64)> {
        let step = *self.steps.last()?;
        Some((step, *self.ash.last()?, *self.tree.last()?, *self.fire.last()?))
    }
}

fn glyph(state: CellState) -> char {
    match state {
        CellState::Tree => '^',
        CellState::Fire => '*',
        CellState::Ash => '.',
    }
}

fn render_grid(sim: &FireSimulation) {
    let grid = sim.grid();
    for i in 0..grid.rows() {
        let line: String = (0..grid.cols()).map(|j| glyph(grid.get(i, j))).collect();
        println!("{line}");
    }
}

/// Prints the 3x3 wind-influence overlay: the probability of fire spreading
/// from a burning center cell into each surrounding tree.
fn print_wind_influence(wind_speed: f64, wind_direction: f64) {
    let overlay = wind_influence_grid();
    println!("wind influence on spread probability:");
    for i in 0..overlay.rows() {
        let line: Vec<String> = (0..overlay.cols())
            .map(|j| {
                if i == 1 && j == 1 {
                    " fire".to_string()
                } else {
                    format!("{:.3}", spread_probability_at(&overlay, i, j, wind_speed, wind_direction))
                }
            })
            .collect();
        println!("  {}", line.join("  "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let parameters = match SimulationParameters::new(
        args.wind_speed,
        args.wind_direction,
        args.regrowth,
        args.ignition,
    ) {
        Ok(parameters) => parameters,
        Err(error) => {
            eprintln!("invalid parameters: {error}");
            std::process::exit(2);
        }
    };

    let config = SimulationConfig {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
        parameters,
    };
    let mut sim = match FireSimulation::new(config) {
        Ok(sim) => sim,
        Err(error) => {
            eprintln!("invalid configuration: {error}");
            std::process::exit(2);
        }
    };

    println!(
        "forest-fire simulation: {}x{} grid, seed {}, wind {:.2} @ {:.0} deg",
        args.rows,
        args.cols,
        sim.seed(),
        args.wind_speed,
        args.wind_direction
    );

    if args.wind_speed > 0.0 {
        print_wind_influence(args.wind_speed, args.wind_direction);
    }

    let mut history = HistoricalSeries::default();
    let mut peak_fire = 0.0_f64;
    let mut peak_fire_step = 0_u64;

    for _ in 0..args.steps {
        if args.interval_ms > 0 {
            thread::sleep(Duration::from_millis(args.interval_ms));
        }

        let stats = sim.step();
        history.push(sim.current_step(), &stats);

        if stats.fire > peak_fire {
            peak_fire = stats.fire;
            peak_fire_step = sim.current_step();
        }

        if args.report_interval > 0 && sim.current_step() % args.report_interval == 0 {
            println!(
                "step {:>5}: tree {:6.2}% | fire {:6.2}% | ash {:6.2}%",
                sim.current_step(),
                stats.tree,
                stats.fire,
                stats.ash
            );
            if args.render {
                render_grid(&sim);
            }
        }
    }

    println!("recorded {} samples", history.sample_count());
    if let Some((step, ash, tree, fire)) = history.last_entry() {
        println!("final step {step}: tree {tree:.2}% | fire {fire:.2}% | ash {ash:.2}%");
    }
    println!(
        "peak fire coverage {:.2}% at step {} (average {:.2}%)",
        peak_fire,
        peak_fire_step,
        history.average_fire()
    );
}
