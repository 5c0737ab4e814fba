pub mod static_table;

pub use static_table::StaticRateTable;
