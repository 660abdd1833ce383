pub mod csv_storage;
pub mod watchlist_file;

pub use csv_storage::{CsvExporter, BASE_COLUMNS, DEBUG_COLUMN};
pub use watchlist_file::read_watchlist;
