pub mod country;
pub mod model;
pub mod validation;
