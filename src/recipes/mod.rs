//! Composition recipes. Each one is a single deterministic pass: pick a
//! palette, obtain content, derive any numbers, fill the background,
//! draw its blocks in a fixed order, and hand the canvas to the sink.

pub mod anime;
pub mod book;
pub mod custom;
pub mod life;
pub mod stoic;
pub mod year;
