pub mod game;

pub use game::{FriendMode, FriendState};
