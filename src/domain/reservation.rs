use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::domain::js_number::{format_number, serialize_number};

pub const ROOM_TYPES: [&str; 3] = ["Doble", "Simple", "Suite"];

pub const CHECK_IN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// The eight booking attributes sent to the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationField {
    NumAdultos,
    NumNinos,
    TipoHabitacion,
    PrecioHabitacion,
    DuracionEstadia,
    DiaSemanaCheckIn,
    MesCheckIn,
    AntiguedadReserva,
}

impl ReservationField {
    /// Fields in form order.
    pub const ALL: [ReservationField; 8] = [
        ReservationField::NumAdultos,
        ReservationField::NumNinos,
        ReservationField::TipoHabitacion,
        ReservationField::PrecioHabitacion,
        ReservationField::DuracionEstadia,
        ReservationField::DiaSemanaCheckIn,
        ReservationField::MesCheckIn,
        ReservationField::AntiguedadReserva,
    ];

    /// Wire name of the field in the request payload.
    pub fn name(self) -> &'static str {
        match self {
            ReservationField::NumAdultos => "numAdultos",
            ReservationField::NumNinos => "numNinos",
            ReservationField::TipoHabitacion => "tipoHabitacion",
            ReservationField::PrecioHabitacion => "precioHabitacion",
            ReservationField::DuracionEstadia => "duracionEstadia",
            ReservationField::DiaSemanaCheckIn => "diaSemanaCheckIn",
            ReservationField::MesCheckIn => "mesCheckIn",
            ReservationField::AntiguedadReserva => "antiguedadReserva",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReservationField::NumAdultos => "Número de Adultos",
            ReservationField::NumNinos => "Número de Niños",
            ReservationField::TipoHabitacion => "Tipo de Habitación",
            ReservationField::PrecioHabitacion => "Precio de Habitación",
            ReservationField::DuracionEstadia => "Duración de Estancia (días)",
            ReservationField::DiaSemanaCheckIn => "Día de la Semana del Check-In",
            ReservationField::MesCheckIn => "Mes del Check-In",
            ReservationField::AntiguedadReserva => "Antigüedad de la Reserva (días)",
        }
    }

    /// Categorical fields keep the selected text as is; all others are numeric.
    pub fn is_categorical(self) -> bool {
        matches!(
            self,
            ReservationField::TipoHabitacion | ReservationField::DiaSemanaCheckIn
        )
    }

    /// Selectable values for categorical fields.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            ReservationField::TipoHabitacion => Some(&ROOM_TYPES),
            ReservationField::DiaSemanaCheckIn => Some(&CHECK_IN_WEEKDAYS),
            _ => None,
        }
    }
}

impl FromStr for ReservationField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ReservationField::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current value of a single form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => f.write_str(&format_number(*value)),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

/// Request payload for the prediction service.
///
/// Numeric fields hold whatever the form coerced, including `NaN`; they are
/// not range checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInput {
    #[serde(serialize_with = "serialize_number")]
    pub num_adultos: f64,
    #[serde(serialize_with = "serialize_number")]
    pub num_ninos: f64,
    pub tipo_habitacion: String,
    #[serde(serialize_with = "serialize_number")]
    pub precio_habitacion: f64,
    #[serde(serialize_with = "serialize_number")]
    pub duracion_estadia: f64,
    pub dia_semana_check_in: String,
    #[serde(serialize_with = "serialize_number")]
    pub mes_check_in: f64,
    #[serde(serialize_with = "serialize_number")]
    pub antiguedad_reserva: f64,
}

impl Default for ReservationInput {
    fn default() -> Self {
        Self {
            num_adultos: 2.0,
            num_ninos: 1.0,
            tipo_habitacion: "Doble".to_string(),
            precio_habitacion: 100.0,
            duracion_estadia: 3.0,
            dia_semana_check_in: "Friday".to_string(),
            mes_check_in: 4.0,
            antiguedad_reserva: 60.0,
        }
    }
}

impl ReservationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ReservationField) -> FieldValue {
        match field {
            ReservationField::NumAdultos => FieldValue::Number(self.num_adultos),
            ReservationField::NumNinos => FieldValue::Number(self.num_ninos),
            ReservationField::TipoHabitacion => FieldValue::Text(self.tipo_habitacion.clone()),
            ReservationField::PrecioHabitacion => FieldValue::Number(self.precio_habitacion),
            ReservationField::DuracionEstadia => FieldValue::Number(self.duracion_estadia),
            ReservationField::DiaSemanaCheckIn => {
                FieldValue::Text(self.dia_semana_check_in.clone())
            }
            ReservationField::MesCheckIn => FieldValue::Number(self.mes_check_in),
            ReservationField::AntiguedadReserva => FieldValue::Number(self.antiguedad_reserva),
        }
    }

    /// Mutable slot of a numeric field, `None` for categorical fields.
    pub fn number_mut(&mut self, field: ReservationField) -> Option<&mut f64> {
        match field {
            ReservationField::NumAdultos => Some(&mut self.num_adultos),
            ReservationField::NumNinos => Some(&mut self.num_ninos),
            ReservationField::PrecioHabitacion => Some(&mut self.precio_habitacion),
            ReservationField::DuracionEstadia => Some(&mut self.duracion_estadia),
            ReservationField::MesCheckIn => Some(&mut self.mes_check_in),
            ReservationField::AntiguedadReserva => Some(&mut self.antiguedad_reserva),
            ReservationField::TipoHabitacion | ReservationField::DiaSemanaCheckIn => None,
        }
    }

    /// Mutable slot of a categorical field, `None` for numeric fields.
    pub fn text_mut(&mut self, field: ReservationField) -> Option<&mut String> {
        match field {
            ReservationField::TipoHabitacion => Some(&mut self.tipo_habitacion),
            ReservationField::DiaSemanaCheckIn => Some(&mut self.dia_semana_check_in),
            _ => None,
        }
    }
}
