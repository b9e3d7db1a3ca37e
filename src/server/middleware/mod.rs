pub mod hypermedia;
pub mod payload;
