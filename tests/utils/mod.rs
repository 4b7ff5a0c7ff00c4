// Shared helpers; not every test binary uses every helper
#![allow(dead_code)]

pub mod db;
pub mod factories;
pub mod helpers;
