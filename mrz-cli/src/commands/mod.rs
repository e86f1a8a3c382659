pub mod country;
pub mod decode;
pub mod verify;
