//! Renderers for record sets
//!
//! Each renderer writes one presentation of a [`RecordSet`](crate::RecordSet)
//! to an [`std::io::Write`]. Pick one through [`crate::dispatch`].

pub mod json;
pub mod key_value;
pub mod table;
pub mod template;

pub use json::{write_array, write_single};
pub use key_value::write_key_values;
pub use table::{column_widths, write_table};
pub use template::{substitute, write_custom};
