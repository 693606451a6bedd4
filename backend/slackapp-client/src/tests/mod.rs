mod diagnostic;
mod error;
mod response;
