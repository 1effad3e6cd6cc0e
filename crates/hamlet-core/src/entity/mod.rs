pub mod input;
pub mod player;
pub mod skeleton;

pub use input::{Direction, InputEdge, InputState, Intent};
pub use player::Character;
pub use skeleton::{Joint, LocalTransform, Skeleton};
