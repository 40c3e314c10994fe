pub mod acmg;
pub mod cli;
pub mod commands;
pub mod model;
pub mod tiering;
pub mod utils;
