mod client;
mod types;

pub use client::{HttpQaModel, QaModel};
pub use types::Answer;
