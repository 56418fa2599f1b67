pub mod client;
pub mod error;
pub mod inventory;
pub mod rate_limit;
pub mod types;

pub use client::{WarehouseClient, WarehouseSession};
pub use error::ScraperError;
pub use inventory::{
    extract_final_stock, extract_locations, filter_display_locations, parse_stock_record,
    InventoryPage,
};
pub use types::{LocationEntry, StockRecord};
