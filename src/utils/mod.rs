pub mod crypto;
pub mod extract;
pub mod join_code;
pub mod validation;
