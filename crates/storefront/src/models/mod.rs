//! Domain models for the storefront.
//!
//! These are validated domain objects, separate from the database row types
//! used inside the repositories.

pub mod address;
pub mod cart_item;
pub mod order;
pub mod session;

pub use address::{Address, NewAddress};
pub use cart_item::{CartItem, NewCartItem};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderWithItems};
pub use session::{session_keys, CurrentUser};
