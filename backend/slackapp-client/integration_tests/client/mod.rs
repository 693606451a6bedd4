mod errors;
mod manifest;
mod rotation;
