pub mod paths;
pub mod text;

pub use paths::{path_key, same_file};
pub use text::{line_ending, strip_line_ending};
