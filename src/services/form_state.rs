use chrono::NaiveDate;

use crate::domain::js_number::coerce_number;
use crate::domain::reservation::{FormError, ReservationField, ReservationInput};

/// Holds the reservation form while it is being edited.
///
/// Categorical fields store the selected text verbatim; every other field is
/// coerced to a number and an unreadable entry is stored as `NaN`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    input: ReservationInput,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ReservationInput {
        &self.input
    }

    /// Copy of the current values, detached from further edits.
    pub fn snapshot(&self) -> ReservationInput {
        self.input.clone()
    }

    pub fn update_field(&mut self, name: &str, raw_value: &str) -> Result<ReservationField, FormError> {
        let field: ReservationField = name.parse()?;
        self.set_raw(field, raw_value);
        Ok(field)
    }

    pub fn set_raw(&mut self, field: ReservationField, raw_value: &str) {
        if let Some(text) = self.input.text_mut(field) {
            *text = raw_value.to_string();
        } else if let Some(number) = self.input.number_mut(field) {
            *number = coerce_number(raw_value);
        }
    }

    /// Fills weekday and month from the check-in date.
    pub fn apply_check_in_date(&mut self, check_in: NaiveDate) -> [ReservationField; 2] {
        let weekday = check_in.format("%A").to_string();
        let month = check_in.format("%-m").to_string();
        self.set_raw(ReservationField::DiaSemanaCheckIn, &weekday);
        self.set_raw(ReservationField::MesCheckIn, &month);
        [ReservationField::DiaSemanaCheckIn, ReservationField::MesCheckIn]
    }

    /// Fills the booking age as whole days from `booked_on` to `today`.
    /// A booking date in the future gives a negative age, which is kept.
    pub fn apply_booking_date(&mut self, booked_on: NaiveDate, today: NaiveDate) -> ReservationField {
        let days = (today - booked_on).num_days();
        self.set_raw(ReservationField::AntiguedadReserva, &days.to_string());
        ReservationField::AntiguedadReserva
    }
}
