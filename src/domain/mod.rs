pub mod js_number;
pub mod prediction;
pub mod reservation;
pub mod view_model;
