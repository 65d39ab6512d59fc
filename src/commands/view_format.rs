use crate::domain::prediction::PredictionResult;
use crate::domain::reservation::ReservationField;
use crate::domain::view_model::ViewModel;

pub fn format_view(view: &ViewModel<'_>) -> String {
    let mut lines = Vec::new();
    lines.push("🔮 Predicción de Cancelación".to_string());
    lines.push(String::new());

    for field in ReservationField::ALL {
        lines.push(format_field_row(view, field));
    }
    lines.push(String::new());

    if view.trigger_enabled() {
        lines.push(format!("[ {} ]", view.trigger_label()));
    } else {
        lines.push(format!("[ {} ] (disabled)", view.trigger_label()));
    }

    if let Some(message) = view.error {
        lines.push(String::new());
        lines.push(format!("⚠ {message}"));
    }

    if let Some(result) = view.result {
        lines.push(String::new());
        lines.push(format_result(result));
    }

    lines.join("\n")
}

pub fn format_result(result: &PredictionResult) -> String {
    format!(
        "¿Cancelará? {}\nConfianza del modelo: {}",
        result.verdict().label(),
        result.confidence_label()
    )
}

fn format_field_row(view: &ViewModel<'_>, field: ReservationField) -> String {
    let value = view.form.value(field);
    match field.options() {
        Some(options) => format!(
            "{label}: {value}  [{name}: {options}]",
            label = field.label(),
            name = field.name(),
            options = options.join(" | ")
        ),
        None => format!("{}: {value}  [{}]", field.label(), field.name()),
    }
}
