mod error;
pub use error::{Error, Result};

mod app;
mod events;
pub mod pages;
mod theme;
mod threads;
mod traits;

pub use app::App;
pub use events::AppEvent;
