//! UI Components
//!
//! Reusable Leptos components.

mod add_button;
mod add_card_form;
mod background;
mod card_footer;
mod card_item;
mod delete_button;
mod foreground;
mod icon_selector;
mod mode_selector;
mod nav_bar;
mod tag_color_select;

pub use add_button::AddButton;
pub use add_card_form::AddCardForm;
pub use background::Background;
pub use card_footer::CardFooter;
pub use card_item::CardItem;
pub use delete_button::DeleteButton;
pub use foreground::Foreground;
pub use icon_selector::IconSelector;
pub use mode_selector::ModeSelector;
pub use nav_bar::NavBar;
pub use tag_color_select::TagColorSelect;
