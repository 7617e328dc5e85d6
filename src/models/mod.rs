pub mod tasking_request;

pub use tasking_request::*;
