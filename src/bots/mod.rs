pub mod hint;
pub mod random;
pub mod registry;

pub use hint::HintBot;
pub use random::RandomBot;
