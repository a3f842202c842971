mod writer;

pub use writer::{write, write_settings};
