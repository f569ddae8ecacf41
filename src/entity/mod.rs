pub mod basket_items;
pub mod baskets;
pub mod manufacturers;
pub mod users;
pub mod watches;

pub use basket_items::Entity as BasketItems;
pub use baskets::Entity as Baskets;
pub use manufacturers::Entity as Manufacturers;
pub use users::Entity as Users;
pub use watches::Entity as Watches;
