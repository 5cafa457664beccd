//! Interface selection application layer

mod select_interfaces;

pub use select_interfaces::SelectInterfacesUseCase;
