//! Level packs: a level bundled with the rules it is played under.

mod pack;

pub use pack::LevelPack;
