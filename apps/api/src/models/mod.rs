pub mod customer;
pub mod tone;
