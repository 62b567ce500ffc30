pub mod format;
pub mod query;

pub use format::{null_as_default, string_or_number, tx_tag, vec_string_or_number};
pub use query::{address_list, query_escape, raw_tx, uppercase_first_char};
