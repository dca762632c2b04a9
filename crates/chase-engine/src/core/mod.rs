pub use self::{board::*, line::*, player::*};

pub(crate) mod board;
pub(crate) mod line;
pub(crate) mod player;
