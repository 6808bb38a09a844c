pub mod store_path;
