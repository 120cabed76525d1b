// src/lib.rs

pub mod config;
pub mod error;
pub mod generation;
pub mod persona;
pub mod web;
