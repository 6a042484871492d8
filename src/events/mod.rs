pub mod contact;
pub mod nav;
pub mod pointer;

pub use contact::{refresh_contact_form, wire_contact_form};
pub use nav::wire_navigation;
pub use pointer::wire_pointer_handlers;
