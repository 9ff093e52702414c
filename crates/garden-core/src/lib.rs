pub mod canvas;
pub mod catalog;
pub mod color;
pub mod constants;
pub mod controls;
pub mod error;
pub mod formation;
pub mod garden;
pub mod noise;
pub mod particles;
pub mod shader;
pub mod spring;
pub mod stage;
pub mod swarm;
pub mod trajectory;

pub use canvas::{Canvas, Cell};
pub use catalog::{FormationMeta, SceneMeta, Theme};
pub use color::{blend, color_at, Rgb};
pub use controls::{Action, Controls, Direction};
pub use error::GardenError;
pub use formation::FormationId;
pub use garden::{Garden, GardenSettings};
pub use particles::{Emitter, Particle};
pub use shader::ShaderKind;
pub use spring::{Spring, SpringTuning};
pub use stage::Stage;
pub use swarm::{Follower, Swarm};
pub use trajectory::SceneId;
