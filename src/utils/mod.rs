pub mod access_code;
pub mod password;
pub mod session;
pub mod validate;

pub use access_code::{ACCESS_CODE_LEN, generate_access_code};
