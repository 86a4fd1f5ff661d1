// Gatepost: content-moderation demo service.
//
// This is the library root. Each module corresponds to a major subsystem
// of the moderation pipeline.

pub mod classifier;
pub mod config;
pub mod feed;
pub mod lexicon;
pub mod moderation;
pub mod web;
