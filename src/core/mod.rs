pub mod domain;
pub mod errors;
pub mod use_cases;
