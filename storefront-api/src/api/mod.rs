pub mod admin;
pub mod dashboard;
pub mod pages;
pub mod products;
pub mod recommendations;
