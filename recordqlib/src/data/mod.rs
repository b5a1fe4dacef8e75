//! Record types: the shapes every query operates on.
//!
//! Two independent record kinds are supported:
//!
//! - **Item**: an inventory entry (name, durability, type)
//! - **Request**: a logged service request (id, route, severity, timestamp)
//!
//! Records are plain data. Queries borrow them as slices and never mutate
//! them; the order of a slice is meaningful wherever a query breaks ties.
//!
//! ## Example
//!
//! ```rust
//! use recordqlib::data::Item;
//!
//! let item = Item::new("Bow", 90, "Weapon");
//! assert_eq!(item.to_string(), "[Weapon] Bow: 90");
//! ```

pub mod item;
pub mod request;

pub use item::Item;
pub use request::Request;
