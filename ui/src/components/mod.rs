//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.
pub mod conversion_box;
pub mod pico;
pub mod token_purchase_form;
