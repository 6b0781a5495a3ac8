//! Procedural content: loot items and stage layouts.

pub mod loot;
pub mod stage;

#[cfg(test)]
mod tests;
