use crate::commands::base_commands::Commands;
use crate::domain::action::RotationAction;
use crate::domain::rotation::Rotation;
use crate::services::rotation_file::serialize_rotation_to_yaml;

pub fn init_command(cmd: Commands) {
    if let Commands::Init { output } = cmd {
        let rotation = starter_rotation();

        let mut buffer = Vec::new();
        if let Err(e) = serialize_rotation_to_yaml(&mut buffer, &rotation) {
            eprintln!("Failed to serialize starter rotation: {e:?}");
            return;
        }

        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write starter rotation: {e:?}");
        } else {
            println!("Starter rotation written to {output}");
        }
    }
}

// Small enough to demonstrate a cooldown conflict on the second Fireball.
fn starter_rotation() -> Rotation {
    let mut fireball = RotationAction::new("f1", "Fireball", 2.5, 8.0);
    fireball.color = Some("#d6612c".to_string());
    fireball.notes = Some("open with this".to_string());

    let ice_lance = RotationAction::new("i1", "Ice Lance", 1.0, 0.0);

    let mut fireball_again = RotationAction::new("f2", "Fireball", 2.5, 8.0);
    fireball_again.color = Some("#d6612c".to_string());

    Rotation {
        name: "Starter".to_string(),
        actions: vec![fireball, ice_lance, fireball_again],
    }
}
