mod error_box;

pub use error_box::{truncate_message, ErrorBox, MAX_MESSAGE_LEN};
