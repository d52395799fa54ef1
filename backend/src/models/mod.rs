// src/models/mod.rs

pub mod artifact;
pub mod chat;
pub mod course;
pub mod discovery;
pub mod note;
pub mod question;
pub mod quiz_result;
pub mod recommendation;
