use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a rotation timeline and serialize the summary to YAML
    Simulate {
        /// Rotation YAML or JSON file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of back-to-back repetitions (clamped to 1..=10)
        #[arg(short, long, default_value_t = 1)]
        repetitions: usize,
    },
    /// Plot a rotation timeline into a PNG chart
    Plot {
        /// Rotation YAML or JSON file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Number of back-to-back repetitions (clamped to 1..=10)
        #[arg(short, long, default_value_t = 1)]
        repetitions: usize,
    },
    /// Write a starter rotation YAML file
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_defaults_to_one_repetition() {
        let args = CliArgs::parse_from([
            "rotsim",
            "simulate",
            "-i",
            "rotation.yaml",
            "-o",
            "summary.yaml",
        ]);

        if let Commands::Simulate { repetitions, .. } = args.command {
            assert_eq!(repetitions, 1);
        } else {
            panic!("expected simulate command");
        }
    }

    #[test]
    fn plot_accepts_repetition_count() {
        let args = CliArgs::parse_from([
            "rotsim",
            "plot",
            "-i",
            "rotation.yaml",
            "-o",
            "timeline.png",
            "-r",
            "3",
        ]);

        if let Commands::Plot { repetitions, .. } = args.command {
            assert_eq!(repetitions, 3);
        } else {
            panic!("expected plot command");
        }
    }
}
