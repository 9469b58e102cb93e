//! UI Components
//!
//! Navigation shell pieces and the list/form views.

mod nav_bar;
mod status_banner;
mod delete_confirm_button;
mod customer_list;
mod customer_form;
mod order_list;
mod order_form;
mod not_found;

pub use nav_bar::{Link, NavBar};
pub use status_banner::StatusBanner;
pub use delete_confirm_button::DeleteConfirmButton;
pub use customer_list::CustomerList;
pub use customer_form::CustomerForm;
pub use order_list::OrderList;
pub use order_form::OrderForm;
pub use not_found::NotFound;
