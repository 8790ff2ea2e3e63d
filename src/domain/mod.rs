pub mod candidate_file;
pub mod conversion_mode;
pub mod input_source;
pub mod outcome;
pub mod output_directory;
pub mod output_format;
pub mod source_image;

// --- public re-exports ---
pub use candidate_file::CandidateFile;
pub use conversion_mode::ConversionMode;
pub use input_source::{DirectoryPath, PathError};
pub use outcome::{BatchReport, ConversionOutcome};
pub use output_directory::OutputDirectory;
pub use output_format::{OutputFormat, OutputFormatError};
pub use source_image::{ConversionError, SourceImage};
