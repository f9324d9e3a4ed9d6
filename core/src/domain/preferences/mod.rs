pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod fakes;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
