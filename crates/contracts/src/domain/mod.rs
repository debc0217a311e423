pub mod common;

pub mod a001_company;
pub mod a002_brand;
pub mod a003_area;
pub mod a004_restaurant;
