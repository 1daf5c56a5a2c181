use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_timeline_report;
use crate::services::repetition::compute_repeated_timeline;
use crate::services::rotation_file::load_rotation_from_file;
use crate::services::timeline_plot::write_timeline_png;

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        input,
        output,
        repetitions,
    } = cmd
    {
        let rotation = match load_rotation_from_file(&input) {
            Ok(rotation) => rotation,
            Err(e) => {
                eprintln!("Failed to load rotation: {e:?}");
                return;
            }
        };

        let summary = compute_repeated_timeline(&rotation.actions, repetitions);

        println!("{}", format_timeline_report(&rotation.name, &summary));

        let plot_path = format!("{output}.png");
        if let Err(e) = write_timeline_png(&plot_path, &rotation.name, &summary) {
            eprintln!("Failed to write timeline plot: {e:?}");
        }

        let yaml = match serde_yaml::to_string(&summary) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize timeline summary: {e:?}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write timeline summary: {e:?}");
        } else {
            println!("Timeline summary written to {output}");
            println!("Timeline plot written to {plot_path}");
        }
    }
}
