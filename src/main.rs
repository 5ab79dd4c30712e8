// Headless demo: drives the swarm and the harmony sequencer at a fixed tick
// rate and logs what an audiovisual host would render.
use clap::Parser;
use glam::Vec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swarmsong::cli::Args;
use swarmsong::config::AppConfig;
use swarmsong::flock::swarm::Swarm;
use swarmsong::music::sequencer::HarmonySequencer;
use swarmsong::voice::TraceVoices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load_or_default(&args.config);
    if let Some(n) = args.agents {
        config.flock.total_agents = n;
    }
    config.sanitize();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting");

    let mut swarm = Swarm::new(config.flock, seed);
    // Decorrelate the two generators while keeping both reproducible.
    let mut sequencer = HarmonySequencer::new(config.harmony, seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut voices = TraceVoices;

    let tick_hz = args.tick_hz.clamp(1.0, 1000.0);
    let dt = 1.0 / tick_hz;
    let total_ticks = (args.duration.max(0.0) * tick_hz).ceil() as u64;
    let report_every = tick_hz.round().max(1.0) as u64;

    for tick in 0..total_ticks {
        swarm.tick(dt);
        sequencer.tick(dt, &mut voices);

        if tick % report_every == 0 {
            let n = swarm.agents.len().max(1) as f32;
            let centroid = swarm
                .agents
                .iter()
                .fold(Vec3::ZERO, |acc, a| acc + a.position)
                / n;
            info!(
                t_sec = tick as f32 * dt,
                chord = sequencer.current_chord_name(),
                agents = swarm.agents.len(),
                centroid = ?centroid,
                melody_len = sequencer.melody().len(),
                "status"
            );
        }
    }
    info!("done");
}
