use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// List pad slots and their capabilities.
    List,
    /// Poll connected pads and print state changes.
    Watch {
        /// Watch a single slot instead of all of them
        #[clap(short, long)]
        slot: Option<usize>,

        /// Poll interval in milliseconds
        #[clap(long, default_value_t = 16)]
        interval_ms: u64,
    },
    /// Run the vibration motors of one pad.
    Rumble {
        /// Slot to rumble
        slot: usize,

        /// Left (low-frequency) motor magnitude, 0.0..=1.0
        #[clap(long, default_value_t = 1.0)]
        left: f32,

        /// Right (high-frequency) motor magnitude, 0.0..=1.0
        #[clap(long, default_value_t = 1.0)]
        right: f32,

        /// Duration in milliseconds
        #[clap(long, default_value_t = 1000)]
        ms: u64,
    },
}

/// Inspect gamepads through the crosspad input model.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
