mod contact;
mod scene;

pub use contact::{health, send};
pub use scene::scene;
