pub mod demo;
mod helpers;
pub mod menu_bar;
pub mod nav;
pub mod pages;
pub mod status;
