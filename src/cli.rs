use anyhow::{anyhow, Result};

use tui_life::types::{DEFAULT_CELL_SIZE, DEFAULT_STEP_MS};

// Largest grid dimension the CLI accepts per axis.
const MAX_GRID_DIM: i32 = 16_384;

/// Options parsed from the command line.
///
/// `columns`/`rows` stay `None` when not given; the frontend then sizes the
/// grid to fill the terminal at the chosen cell size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub columns: Option<i32>,
    pub rows: Option<i32>,
    pub cell_size: u16,
    pub step_interval_ms: u32,
    pub seed: Option<u32>,
    pub pattern: Option<String>,
    pub start_running: bool,
    pub show_help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            columns: None,
            rows: None,
            cell_size: DEFAULT_CELL_SIZE,
            step_interval_ms: DEFAULT_STEP_MS,
            seed: None,
            pattern: None,
            start_running: false,
            show_help: false,
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--cols" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --cols"))?;
                let n = v
                    .parse::<i32>()
                    .map_err(|_| anyhow!("invalid --cols value: {}", v))?;
                if !(0..=MAX_GRID_DIM).contains(&n) {
                    return Err(anyhow!("--cols out of range 0-{}: {}", MAX_GRID_DIM, v));
                }
                config.columns = Some(n);
            }
            "--rows" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --rows"))?;
                let n = v
                    .parse::<i32>()
                    .map_err(|_| anyhow!("invalid --rows value: {}", v))?;
                if !(0..=MAX_GRID_DIM).contains(&n) {
                    return Err(anyhow!("--rows out of range 0-{}: {}", MAX_GRID_DIM, v));
                }
                config.rows = Some(n);
            }
            "--cell-size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --cell-size"))?;
                config.cell_size = v
                    .parse::<u16>()
                    .map_err(|_| anyhow!("invalid --cell-size value: {}", v))?;
            }
            "--interval-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --interval-ms"))?;
                config.step_interval_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --interval-ms value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--pattern" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pattern"))?;
                config.pattern = Some(v.clone());
            }
            "--run" => {
                config.start_running = true;
            }
            "--help" | "-h" => {
                config.show_help = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

pub fn usage() -> &'static str {
    "tui-life: Conway's Game of Life in the terminal

USAGE:
    tui-life [OPTIONS]

OPTIONS:
    --cols <n>          Grid columns, 0-16384 (default: fill the terminal)
    --rows <n>          Grid rows, 0-16384 (default: fill the terminal)
    --cell-size <n>     On-screen cell size, 1-4 (default: 1)
    --interval-ms <n>   Step interval in milliseconds, 10-1000 (default: 10)
    --seed <n>          Seed for the random board (default: from the clock)
    --pattern <name>    Start from a named pattern instead of a random board
    --run               Start running instead of paused
    -h, --help          Show this help

KEYS:
    space  run/pause      n  step once        r  randomize
    c      clear          p  next pattern     +/-  cell size
    [/]    slower/faster  q  quit"
}
