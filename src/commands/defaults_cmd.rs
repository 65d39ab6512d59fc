use std::process::ExitCode;

use crate::commands::base_commands::OutputFormat;
use crate::domain::reservation::ReservationInput;

pub fn defaults_command(format: OutputFormat) -> ExitCode {
    match render_defaults(format) {
        Ok(contents) => {
            println!("{}", contents.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize default form: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn render_defaults(format: OutputFormat) -> Result<String, String> {
    let input = ReservationInput::default();
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(&input).map_err(|e| e.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&input).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_defaults_use_wire_names() {
        let yaml = render_defaults(OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("numAdultos: 2"));
        assert!(yaml.contains("tipoHabitacion: Doble"));
        assert!(yaml.contains("precioHabitacion: 100"));
        assert!(yaml.contains("diaSemanaCheckIn: Friday"));
        assert!(yaml.contains("antiguedadReserva: 60"));
    }

    #[test]
    fn json_defaults_parse_back_to_the_same_values() {
        let json = render_defaults(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["numNinos"], 1);
        assert_eq!(value["mesCheckIn"], 4);
        assert_eq!(value["duracionEstadia"], 3);
    }
}
