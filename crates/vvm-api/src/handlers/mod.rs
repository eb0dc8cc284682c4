//! Request handlers for the vehicle API

pub mod vehicles;
