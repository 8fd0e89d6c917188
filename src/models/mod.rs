pub mod error;
pub mod event;
pub mod greeting;

pub use error::AppError;
pub use event::{InvocationEvent, InvocationResponse};
pub use greeting::GreetingBody;
