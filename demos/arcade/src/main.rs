//! arcade: headless demo for the haunt ghost-AI engine.
//!
//! Four ghosts hunt a scripted runner that laps a small maze with a side
//! tunnel.  Movement is a toy layer (one tile per tick for ghosts, one tile
//! every other tick for the runner); all decisions come from `haunt-sim`.
//!
//! ```text
//! cargo run -p haunt-arcade -- --ticks 3600 --pellet-at 600 --tunnel
//! RUST_LOG=haunt_behavior=debug cargo run -p haunt-arcade -- --ticks 300
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use haunt_agent::RosterBuilder;
use haunt_behavior::{BehaviorConfig, HouseConfig, Intent, Pursued, Signal, Transition};
use haunt_core::{AgentId, Direction, GhostKind, Position, Tick, Tile};
use haunt_maze::AsciiMaze;
use haunt_sim::{Sim, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const TILE: i32 = 8;

// '#' is a wall.  Row 5 is open at both ends (the tunnel); the door at
// column 9 of row 4 joins the house (row 5, columns 7..=11) to row 3.
const MAZE: &str = "\
###################
#........#........#
#.##.###.#.###.##.#
#.................#
#.##.#.##.##.#.##.#
......#.....#......
#.##.#.#####.#.##.#
#........#........#
#.##.###.#.###.##.#
#.................#
###################";

const HOUSE_EXIT:  Tile = Tile::new(9, 3);
const HOUSE_ENTRY: Tile = Tile::new(9, 5);

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the haunt ghost AI against a scripted runner")]
struct Cli {
    /// Logic ticks to simulate.
    #[arg(long, default_value_t = 3_600)]
    ticks: u64,

    /// Seed for the frightened-wander RNGs.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON file with a `BehaviorConfig`.  Missing fields take defaults; the
    /// house positions are always taken from the built-in maze.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tick at which the runner eats a power pellet.
    #[arg(long)]
    pellet_at: Option<u64>,

    /// Connect the left and right edges of the maze.
    #[arg(long)]
    tunnel: bool,

    /// Keep every ghost of this kind (chaser, ambusher, flanker, shy) frozen.
    #[arg(long)]
    freeze: Option<GhostKind>,

    /// Print the final summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

// ── Runner ────────────────────────────────────────────────────────────────────

/// Scripted pursued agent lapping the open rectangle between rows 3 and 9.
struct Runner {
    lap: Vec<Tile>,
}

impl Runner {
    fn new() -> Self {
        let mut lap = Vec::new();
        lap.extend((1..=17).map(|c| Tile::new(c, 3)));
        lap.extend((4..=9).map(|r| Tile::new(17, r)));
        lap.extend((1..=16).rev().map(|c| Tile::new(c, 9)));
        lap.extend((4..=8).rev().map(|r| Tile::new(1, r)));
        Self { lap }
    }

    fn at(&self, tick: u64) -> Pursued {
        let len = self.lap.len();
        let i = (tick / 2) as usize % len;
        let here = self.lap[i];
        let next = self.lap[(i + 1) % len];
        let facing = match (next.col - here.col, next.row - here.row) {
            (1, _)  => Direction::Right,
            (-1, _) => Direction::Left,
            (_, 1)  => Direction::Down,
            _       => Direction::Up,
        };
        Pursued { position: here.to_world(TILE), facing }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default, Clone, Serialize)]
struct GhostStats {
    moves:       u64,
    holds:       u64,
    transitions: BTreeMap<String, u64>,
    captured:    u64,
    catches:     u64,
}

#[derive(Default)]
struct SummaryObserver {
    stats: Vec<GhostStats>,
}

impl SummaryObserver {
    fn new(ghosts: usize) -> Self {
        Self { stats: vec![GhostStats::default(); ghosts] }
    }
}

impl SimObserver for SummaryObserver {
    fn on_transition(&mut self, tick: Tick, t: &Transition) {
        tracing::debug!(%tick, transition = %t, "transition");
        if let Some(s) = self.stats.get_mut(t.agent.index()) {
            *s.transitions.entry(t.to.as_str().to_owned()).or_default() += 1;
        }
    }

    fn on_intent(&mut self, _tick: Tick, agent: AgentId, intent: &Intent) {
        if let Some(s) = self.stats.get_mut(agent.index()) {
            if intent.is_hold() {
                s.holds += 1;
            } else {
                s.moves += 1;
            }
        }
    }
}

#[derive(Serialize)]
struct GhostSummary {
    agent:    u32,
    kind:     GhostKind,
    state:    String,
    position: Position,
    #[serde(flatten)]
    stats:    GhostStats,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let maze = AsciiMaze::parse(MAZE.lines(), TILE).context("parsing built-in maze")?;
    let width = maze.spec.cols * TILE;

    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<BehaviorConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => BehaviorConfig::default(),
    };
    config.house = HouseConfig {
        exit:  HOUSE_EXIT.to_world(TILE),
        entry: HOUSE_ENTRY.to_world(TILE),
    };
    config.tunnel_wrap |= cli.tunnel;

    let exit = config.house.exit;
    let mut roster = RosterBuilder::new(cli.seed)
        .ghost(GhostKind::Chaser,   exit,                            Direction::Left)
        .ghost(GhostKind::Ambusher, HOUSE_ENTRY.to_world(TILE),      Direction::Up)
        .ghost(GhostKind::Flanker,  Tile::new(8, 5).to_world(TILE),  Direction::Up)
        .ghost(GhostKind::Shy,      Tile::new(10, 5).to_world(TILE), Direction::Up);
    if let Some(kind) = cli.freeze {
        roster = roster.frozen(kind);
    }
    let (roster, rngs) = roster.build();

    let mut sim = SimBuilder::new(config, maze.spec, maze.walls, roster, rngs)
        .build()
        .context("building sim")?;

    tracing::info!(
        ticks = cli.ticks,
        seed = cli.seed,
        tunnel = sim.config.tunnel_wrap,
        "starting arcade run"
    );

    let runner = Runner::new();
    let mut obs = SummaryObserver::new(sim.roster.len());
    let t0 = Instant::now();

    sim.signal(Signal::FirstInput, &mut obs);
    for t in 0..cli.ticks {
        if cli.pellet_at == Some(t) {
            let frightened = sim.signal(Signal::PowerPelletConsumed, &mut obs);
            tracing::info!(tick = t, frightened = frightened.len(), "power pellet");
        }

        let pursued = runner.at(t);
        let intents = sim.tick(pursued, &mut obs);
        move_ghosts(&mut sim, &intents, width)?;
        resolve_contacts(&mut sim, pursued, &mut obs);
    }

    let elapsed = t0.elapsed();
    tracing::info!(
        clock = %sim.clock,
        elapsed_ms = elapsed.as_millis() as u64,
        "run complete"
    );

    report(&sim, obs, cli.json)
}

/// Toy movement: one tile along each move intent, wrapping horizontally.
fn move_ghosts(sim: &mut Sim, intents: &[(AgentId, Intent)], width: i32) -> Result<()> {
    for &(id, intent) in intents {
        let Intent::Move { direction, .. } = intent else { continue };
        let Some(ghost) = sim.ghost(id) else {
            bail!("intent for unknown ghost {id}");
        };
        let next = ghost.position.project(TILE, direction);
        let next = Position::new(next.x.rem_euclid(width), next.y);
        sim.commit(id, next, direction)?;
    }
    Ok(())
}

/// Frightened ghosts on the runner's tile are captured; any other ghost
/// there counts as a catch.
fn resolve_contacts(sim: &mut Sim, pursued: Pursued, obs: &mut SummaryObserver) {
    let touching: Vec<(AgentId, bool)> = sim
        .roster
        .iter()
        .filter(|g| g.position == pursued.position)
        .map(|g| (g.id, g.state.is_frightened()))
        .collect();

    for (id, frightened) in touching {
        if frightened {
            sim.signal(Signal::GhostCaptured(id), obs);
            obs.stats[id.index()].captured += 1;
        } else if let Some(s) = obs.stats.get_mut(id.index()) {
            s.catches += 1;
            tracing::debug!(tick = %sim.now(), ghost = %id, "runner caught");
        }
    }
}

fn report(sim: &Sim, obs: SummaryObserver, json: bool) -> Result<()> {
    let summaries: Vec<GhostSummary> = sim
        .roster
        .iter()
        .zip(obs.stats)
        .map(|(g, stats)| GhostSummary {
            agent:    g.id.0,
            kind:     g.kind,
            state:    g.state.kind().as_str().to_owned(),
            position: g.position,
            stats,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{:<5} {:<9} {:<11} {:>6} {:>6} {:>6} {:>8} {:>8}",
        "id", "kind", "state", "tile", "moves", "holds", "captured", "catches");
    for s in &summaries {
        let tile = s.position.tile(TILE);
        println!("{:<5} {:<9} {:<11} {:>6} {:>6} {:>6} {:>8} {:>8}",
            s.agent,
            s.kind.as_str(),
            s.state,
            format!("{},{}", tile.col, tile.row),
            s.stats.moves,
            s.stats.holds,
            s.stats.captured,
            s.stats.catches,
        );
    }
    Ok(())
}
