pub mod chat;
pub mod contact;
pub mod vehicle;

pub use chat::*;
pub use contact::*;
pub use vehicle::*;
