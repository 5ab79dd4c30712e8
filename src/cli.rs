use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Seed for both simulations (omit for an entropy seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated seconds to run before exiting
    #[arg(long, default_value_t = 30.0)]
    pub duration: f32,

    /// Fixed tick rate in Hz
    #[arg(long, default_value_t = 60.0)]
    pub tick_hz: f32,

    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Override the configured agent count
    #[arg(long)]
    pub agents: Option<usize>,
}
