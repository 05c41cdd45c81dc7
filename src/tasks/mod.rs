pub mod classify;
pub mod control;
pub mod sensor;
