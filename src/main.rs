use clap::{CommandFactory, Parser};
use rotsim::commands::base_commands::{CliArgs, Commands};
use rotsim::commands::{init_cmd, plot_cmd, simulate_cmd};

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_cmd::simulate_command(cmd),
        cmd @ Commands::Plot { .. } => plot_cmd::plot_command(cmd),
        cmd @ Commands::Init { .. } => init_cmd::init_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
