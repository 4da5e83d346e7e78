pub mod capture;
pub mod engine;
pub mod error;
pub mod goban;
pub mod group;
pub mod ko;
pub mod legality;
pub mod rules;
pub mod stone;
pub mod turn;

/// `(x, y)`: column, then row.
pub type Point = (u8, u8);

pub use capture::Capture;
pub use engine::{Captures, Engine, Placement};
pub use error::{GoError, IllegalMove};
pub use goban::Goban;
pub use group::Group;
pub use ko::{Ko, KoTracker};
pub use rules::{Rules, TurnOrder};
pub use stone::Stone;
pub use turn::{Move, Turn, TurnSequencer};
