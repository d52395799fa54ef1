// src/services/mod.rs

pub mod chatbot;
pub mod discovery;
pub mod question_bank;
pub mod recommender;
pub mod repository;
pub mod scorer;
