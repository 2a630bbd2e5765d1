//! The components module contains the shared components of the toolbar.
//! `Avatar` and `ContextMenu` are generic building blocks; `UserMenu` composes
//! them into the account menu.
pub mod avatar;
pub mod context_menu;
pub mod user_menu;
