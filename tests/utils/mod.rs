#![allow(dead_code)]

pub mod factories;
pub mod helpers;
