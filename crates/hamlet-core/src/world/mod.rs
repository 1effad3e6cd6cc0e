//! World management - scenery generation and the running session

pub mod generation;
mod player_movement;
pub mod rng_trait;
mod session;
pub mod structures;
pub mod vegetation;
pub mod worldgen_config;

pub use generation::{SceneLayout, WorldGenerator};
pub use player_movement::PlayerMovementSystem;
pub use rng_trait::{WorldRng, seeded_rng};
pub use session::{Session, SessionParams};
pub use structures::{
    BaseColor, Chimney, HouseSpec, Opening, OpeningKind, Openings, Roof, RoofColor,
    generate_houses,
};
pub use vegetation::{Foliage, FoliageShape, TreeSpec, Trunk, generate_trees};
pub use worldgen_config::{HouseParams, Span, TerrainParams, TreeParams, WorldGenConfig};
