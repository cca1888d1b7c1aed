pub mod avatar;
pub mod controller;
pub mod scan;
