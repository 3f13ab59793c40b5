pub mod flavor;
pub mod page;
pub mod user;
