use crate::commands::base_commands::Commands;
use crate::services::repetition::compute_repeated_timeline;
use crate::services::rotation_file::load_rotation_from_file;
use crate::services::timeline_plot::write_timeline_png;

pub fn plot_command(cmd: Commands) {
    if let Commands::Plot {
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
        if let Err(e) = write_timeline_png(&output, &rotation.name, &summary) {
            eprintln!("Failed to write timeline plot: {e:?}");
        } else {
            println!("Timeline plot written to {output}");
        }
    }
}
