pub mod frame;
pub mod game;

pub use frame::Frame;
pub use game::Game;
