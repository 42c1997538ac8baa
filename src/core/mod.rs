pub mod arm;
pub mod constants;
pub mod geom;
pub mod input;
pub mod layout;
pub mod scene;
pub mod spring;

pub use arm::*;
pub use geom::*;
pub use input::*;
pub use layout::*;
pub use scene::*;
pub use spring::*;
