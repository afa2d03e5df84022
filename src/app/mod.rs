pub mod render;
pub mod session;

pub use render::Renderer;
pub use session::{Command, Outcome, ShopSession};
