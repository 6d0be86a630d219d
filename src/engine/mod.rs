// src/engine/mod.rs
pub mod config;
pub mod passphrase;
pub mod roll;
pub mod wordlist;
