pub mod directory_path;
pub mod path_error;

pub use directory_path::DirectoryPath;
pub use path_error::PathError;
