//! headless: run one swarm scenario without a window and export its output.
//!
//! ```text
//! headless --scenario rumor --ticks 3600 --out output/rumor
//! RUST_LOG=swarm_sim=debug headless --scenario flock --config demos/headless/scenario.toml
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use swarm_agent::AgentStore;
use swarm_core::{Role, SimConfig, Tick};
use swarm_epidemic::{InfectionEvent, Population};
use swarm_output::{CsvWriter, OutputWriter, SimOutputObserver};
use swarm_sim::{RumorSim, SimObserver, SwarmSimBuilder};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which scenario to run
    #[arg(short, long, value_enum, default_value = "flock")]
    scenario: Scenario,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 3_600)]
    ticks: u64,

    /// TOML scenario file; missing keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (default: output/<scenario>)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Override `world.seed`
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks between snapshots (default: one per simulated second)
    #[arg(long)]
    snapshot_every: Option<u64>,

    /// Write `output.db` instead of CSV (needs the `sqlite` feature)
    #[arg(long)]
    sqlite: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scenario {
    Flock,
    Influence,
    Rumor,
}

impl Scenario {
    fn name(self) -> &'static str {
        match self {
            Scenario::Flock     => "flock",
            Scenario::Influence => "influence",
            Scenario::Rumor     => "rumor",
        }
    }
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    infections:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, infections: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_agents(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshot_rows += agents.count;
        self.inner.on_agents(tick, agents);
    }

    fn on_people(&mut self, tick: Tick, people: &Population) {
        self.snapshot_rows += people.count;
        self.inner.on_people(tick, people);
    }

    fn on_infection(&mut self, event: &InfectionEvent) {
        self.infections += 1;
        self.inner.on_infection(event);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.world.seed = seed;
    }
    config.validate().context("invalid scenario configuration")?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| Path::new("output").join(args.scenario.name()));
    std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;

    println!("=== headless: {} ===", args.scenario.name());
    println!(
        "World: {}x{}  |  Ticks: {}  |  Seed: {}",
        config.world.width, config.world.height, args.ticks, config.world.seed
    );

    if args.sqlite {
        #[cfg(feature = "sqlite")]
        {
            let writer = swarm_output::SqliteWriter::new(&out)?;
            return run(&args, &config, writer, &out);
        }
        #[cfg(not(feature = "sqlite"))]
        tracing::warn!("built without the `sqlite` feature; writing CSV instead");
    }
    let writer = CsvWriter::new(&out)?;
    run(&args, &config, writer, &out)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: SimConfig = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), "loaded scenario config");
    Ok(config)
}

fn run<W: OutputWriter>(args: &Args, config: &SimConfig, writer: W, out: &Path) -> Result<()> {
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));
    let t0 = Instant::now();

    match args.scenario {
        Scenario::Flock | Scenario::Influence => {
            let builder = match args.scenario {
                Scenario::Flock => SwarmSimBuilder::leader_follow(config.world.clone(), &config.flock),
                _ => SwarmSimBuilder::social_influence(config.world.clone(), &config.influence),
            };
            let builder = match args.snapshot_every {
                Some(n) => builder.snapshot_interval(n),
                None    => builder,
            };
            let mut sim = builder.build()?;
            sim.run(args.ticks, &mut obs)?;

            println!("Simulation complete in {:.3} s ({})", t0.elapsed().as_secs_f64(), sim.clock);
            println!("  agent_snapshots : {} rows", obs.snapshot_rows);
            if let Some(mean) = sim.mean_alignment() {
                println!("  mean user alignment : {mean:.3}");
            }
            println!();
            println!("{:<8} {:<11} {:>8} {:>8} {:>7}", "Agent", "Role", "x", "y", "speed");
            println!("{}", "-".repeat(46));
            for agent in sim.agents.agent_ids() {
                let view = sim.view(agent)?;
                if view.role == Role::Follower || view.role == Role::User {
                    continue;
                }
                println!(
                    "{:<8} {:<11} {:>8.1} {:>8.1} {:>7.2}",
                    agent.0,
                    view.role.as_str(),
                    view.position.x,
                    view.position.y,
                    view.velocity.length(),
                );
            }
        }
        Scenario::Rumor => {
            let mut sim = RumorSim::new(config.world.clone(), config.rumor.clone())?;
            if let Some(n) = args.snapshot_every {
                sim = sim.with_snapshot_interval(n);
            }
            sim.run(args.ticks, &mut obs)?;

            let counts = sim.counts();
            println!("Simulation complete in {:.3} s ({})", t0.elapsed().as_secs_f64(), sim.clock);
            println!("  person_snapshots : {} rows", obs.snapshot_rows);
            println!("  infection_events : {} rows", obs.infections);
            println!();
            println!("  ignorant : {}", counts.ignorant);
            println!("  spreader : {}", counts.spreader);
            println!("  stifler  : {}", counts.stifler);
        }
    }

    check_output(&mut obs.inner, out)?;
    info!(out = %out.display(), "output written");
    Ok(())
}

/// First writer error recorded during the run, if any.
fn check_output<W: OutputWriter>(obs: &mut SimOutputObserver<W>, out: &Path) -> Result<()> {
    match obs.take_error() {
        Some(e) => Err(e).with_context(|| format!("writing output to {}", out.display())),
        None => Ok(()),
    }
}
