pub mod close;
pub mod event;
pub mod input_adapter;
pub mod script;
pub mod trackball;
pub mod viewer;
