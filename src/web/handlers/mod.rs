pub mod chatbot;
pub mod pages;
pub mod paste;
pub mod social;
pub mod stream;
