pub mod legacy;
pub mod users;
