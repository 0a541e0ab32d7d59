pub mod room;
pub mod pricing;
pub mod inventory;

pub use room::{CatalogError, Room, RoomNumber, RoomType};
pub use pricing::RateCard;
pub use inventory::{InventoryError, RoomInventory};
