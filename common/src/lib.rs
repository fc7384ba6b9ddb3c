mod section;
pub use section::*;

mod reader;
pub use reader::*;

mod config;
pub use config::*;

mod error;
pub use error::{Error, Result};

mod i18n;
pub use i18n::*;

mod state;
pub use state::*;
