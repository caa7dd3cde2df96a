pub mod basic_user;
pub mod guild;
pub mod record;
pub mod sink;
pub mod user;
