use crate::domain::{AppError, PresetKind};

pub fn run_presets(kind: Option<&str>) -> Result<(), AppError> {
    let kinds = match kind {
        Some(value) => vec![PresetKind::from_name(value)?],
        None => PresetKind::ALL.to_vec(),
    };

    for (index, kind) in kinds.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{} ({}):", kind.field().label(), kind.name());
        for preset in kind.presets() {
            println!("  • {}", preset);
        }
    }
    Ok(())
}
