pub mod environment;
pub mod files;

pub use environment::{DATA_DIR_ENV, data_dir_from_lookup, default_data_dir};
pub use files::validate_file_size;
