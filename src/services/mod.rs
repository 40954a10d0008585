pub mod path_data;

pub use path_data::parse_path_data;
