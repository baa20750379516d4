pub mod engine;
pub mod swift;

pub use engine::{BankValidator, ValidationError};
