pub mod constant;
pub mod user_card;
pub mod user_interface;
