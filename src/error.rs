/* src/error.rs */

/// Errors produced while constructing a cursor or decoding fixed-width fields.
///
/// Running out of data in [`read_byte`](crate::BufferCursor::read_byte) or
/// [`read_into`](crate::BufferCursor::read_into) is not an error; those
/// return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The requested view does not fit inside the supplied buffer.
	#[error("view {offset}+{length} exceeds buffer of {buffer_len} bytes")]
	OutOfBounds {
		/// Start of the requested view.
		offset: usize,
		/// Number of readable bytes requested.
		length: usize,
		/// Length of the backing buffer.
		buffer_len: usize,
	},

	/// A fixed-width field needs more bytes than remain in the view.
	#[error("truncated {field}")]
	Truncated {
		/// Name of the truncated field.
		field: &'static str,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::string::ToString;

	#[test]
	fn display_messages() {
		let err = Error::OutOfBounds {
			offset: 4,
			length: 8,
			buffer_len: 10,
		};
		assert_eq!(err.to_string(), "view 4+8 exceeds buffer of 10 bytes");
		let err = Error::Truncated { field: "unit id" };
		assert_eq!(err.to_string(), "truncated unit id");
	}
}
