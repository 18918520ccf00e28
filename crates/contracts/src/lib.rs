//! Data-transfer types shared by consumers of the RAG backend API.

pub mod api;
pub mod chat;
pub mod documents;
pub mod health;
