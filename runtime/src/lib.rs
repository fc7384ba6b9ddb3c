mod error;
pub use error::{Result, RuntimeError};

mod engine;
pub use engine::{assign, assign_all, page_counts};

mod formatter;
pub use formatter::{format_share_text, format_share_text_in};

mod runtime;
pub use runtime::{Runtime, TableRow};

#[cfg(test)]
mod tests;
