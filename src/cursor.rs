/* src/cursor.rs */

use alloc::vec::Vec;

use crate::Error;
use crate::log::{debug, trace};

/// Sequential byte cursor over a borrowed region with mark/reset support.
///
/// The cursor never copies its input. Reads advance a position inside the
/// view; running off the end yields `None` rather than an error. Only
/// [`snapshot_all`](Self::snapshot_all) and
/// [`snapshot_remaining`](Self::snapshot_remaining) allocate.
///
/// The cursor is not synchronized. Wrap it in a
/// [`SharedCursor`](crate::SharedCursor) when another thread needs to export
/// a snapshot.
///
/// ```
/// use framecursor::BufferCursor;
///
/// let frame = [0x01, 0x03, 0x00, 0x10, 0x00, 0x02];
/// let mut cur = BufferCursor::new(&frame);
/// assert_eq!(cur.read_byte(), Some(0x01));
/// cur.mark(0);
/// assert_eq!(cur.read_u8("function code").unwrap(), 0x03);
/// cur.reset();
/// assert_eq!(cur.available(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferCursor<'a> {
	data: &'a [u8],
	start: usize,
	limit: usize,
	pos: usize,
	mark: usize,
}

impl<'a> BufferCursor<'a> {
	/// Create a cursor over the whole of `data`.
	#[must_use]
	pub const fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			start: 0,
			limit: data.len(),
			pos: 0,
			mark: 0,
		}
	}

	/// Create a cursor over `length` bytes of `data` starting at `offset`.
	///
	/// The cursor starts positioned at `offset`, and so does its mark: an
	/// immediate [`reset`](Self::reset) returns to `offset`.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfBounds`] when `offset + length` overflows or
	/// exceeds `data.len()`.
	///
	/// ```
	/// use framecursor::BufferCursor;
	///
	/// let buf = [0xAA, 0xBB, 0x10, 0x20, 0xCC];
	/// let mut cur = BufferCursor::with_range(&buf, 2, 2).unwrap();
	/// assert_eq!(cur.available(), 2);
	/// assert_eq!(cur.read_u16("register").unwrap(), 0x1020);
	/// assert!(BufferCursor::with_range(&buf, 4, 2).is_err());
	/// ```
	pub fn with_range(data: &'a [u8], offset: usize, length: usize) -> Result<Self, Error> {
		let limit = match offset.checked_add(length) {
			Some(end) if end <= data.len() => end,
			_ => {
				debug!(offset, length, buffer_len = data.len(), "rejected cursor view");
				return Err(Error::OutOfBounds {
					offset,
					length,
					buffer_len: data.len(),
				});
			}
		};
		Ok(Self {
			data,
			start: offset,
			limit,
			pos: offset,
			mark: offset,
		})
	}

	/// Number of bytes left before the limit.
	#[must_use]
	pub const fn available(&self) -> usize {
		self.limit - self.pos
	}

	/// Whether every byte of the view has been consumed.
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.pos == self.limit
	}

	/// Unread part of the view, borrowed from the original buffer.
	#[must_use]
	pub fn remaining(&self) -> &'a [u8] {
		&self.data[self.pos..self.limit]
	}

	/// Read one byte, or `None` at end of data.
	pub fn read_byte(&mut self) -> Option<u8> {
		let byte = self.peek_byte()?;
		self.pos += 1;
		Some(byte)
	}

	/// Look at the next byte without consuming it.
	#[must_use]
	pub fn peek_byte(&self) -> Option<u8> {
		self.remaining().first().copied()
	}

	/// Fill as much of `dest` as the view allows.
	///
	/// Same as [`read_into_at`](Self::read_into_at) with offset `0` and the
	/// full length of `dest`.
	pub fn read_into(&mut self, dest: &mut [u8]) -> Option<usize> {
		let len = dest.len();
		self.read_into_at(dest, 0, len)
	}

	/// Copy up to `max_len` bytes into `dest[dest_offset..]`.
	///
	/// Returns `None` when nothing is left to read, leaving the cursor
	/// untouched. Otherwise copies `min(max_len, available)` bytes and returns
	/// that count, which is zero only when `max_len` is zero.
	///
	/// # Panics
	///
	/// Panics if `dest[dest_offset..]` is too short to hold the bytes being
	/// copied, as slice indexing would. The cursor does not move in that case.
	pub fn read_into_at(
		&mut self,
		dest: &mut [u8],
		dest_offset: usize,
		max_len: usize,
	) -> Option<usize> {
		let available = self.available();
		if available == 0 {
			return None;
		}
		let n = max_len.min(available);
		dest[dest_offset..][..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
		self.pos += n;
		Some(n)
	}

	/// Advance by up to `n` bytes, stopping at the limit.
	///
	/// Returns the distance actually moved.
	pub fn skip(&mut self, n: usize) -> usize {
		let n = n.min(self.available());
		self.pos += n;
		n
	}

	/// Move back by up to `n` bytes, stopping at the start of the view.
	///
	/// Returns the distance actually moved.
	pub fn rewind(&mut self, n: usize) -> usize {
		let n = n.min(self.pos - self.start);
		self.pos -= n;
		n
	}

	/// Remember the current position for a later [`reset`](Self::reset).
	///
	/// `_read_limit` is accepted for parity with stream-style APIs. The mark
	/// never expires.
	pub fn mark(&mut self, _read_limit: usize) {
		self.mark = self.pos;
		trace!(mark = self.mark, "cursor mark set");
	}

	/// Return to the last mark, or to the starting position if none was set.
	pub fn reset(&mut self) {
		self.pos = self.mark;
		trace!(pos = self.pos, "cursor reset to mark");
	}

	/// Always `true`.
	#[must_use]
	#[allow(clippy::unused_self)]
	pub const fn mark_supported(&self) -> bool {
		true
	}

	/// Owned copy of the whole view, independent of the current position.
	#[must_use]
	pub fn snapshot_all(&self) -> Vec<u8> {
		self.data[self.start..self.limit].to_vec()
	}

	/// Owned copy of the bytes not yet read.
	#[must_use]
	pub fn snapshot_remaining(&self) -> Vec<u8> {
		self.remaining().to_vec()
	}

	/// Current read position as an index into the backing buffer.
	#[must_use]
	pub const fn buffer_offset(&self) -> usize {
		self.pos
	}

	/// End of the view as an exclusive index into the backing buffer.
	#[must_use]
	pub const fn buffer_length(&self) -> usize {
		self.limit
	}

	/// Read a single byte as a named field.
	///
	/// # Errors
	///
	/// Returns [`Error::Truncated`] at end of data.
	pub fn read_u8(&mut self, field: &'static str) -> Result<u8, Error> {
		let [b] = self.read_array::<1>(field)?;
		Ok(b)
	}

	/// Read a big-endian `u16`.
	///
	/// # Errors
	///
	/// Returns [`Error::Truncated`] when fewer than 2 bytes remain.
	pub fn read_u16(&mut self, field: &'static str) -> Result<u16, Error> {
		self.read_array(field).map(u16::from_be_bytes)
	}

	/// Read a big-endian 24-bit integer.
	///
	/// # Errors
	///
	/// Returns [`Error::Truncated`] when fewer than 3 bytes remain.
	pub fn read_u24(&mut self, field: &'static str) -> Result<u32, Error> {
		let [a, b, c] = self.read_array(field)?;
		Ok(u32::from_be_bytes([0, a, b, c]))
	}

	/// Read a big-endian `u32`.
	///
	/// # Errors
	///
	/// Returns [`Error::Truncated`] when fewer than 4 bytes remain.
	pub fn read_u32(&mut self, field: &'static str) -> Result<u32, Error> {
		self.read_array(field).map(u32::from_be_bytes)
	}

	/// Borrow the next `n` bytes and advance past them.
	///
	/// # Errors
	///
	/// Returns [`Error::Truncated`] when fewer than `n` bytes remain. The
	/// cursor does not move in that case.
	pub fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], Error> {
		let Some(slice) = self.remaining().get(..n) else {
			trace!(field, need = n, have = self.available(), "truncated field");
			return Err(Error::Truncated { field });
		};
		self.pos += n;
		Ok(slice)
	}

	fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], Error> {
		let Some(bytes) = self.remaining().first_chunk::<N>().copied() else {
			trace!(field, need = N, have = self.available(), "truncated field");
			return Err(Error::Truncated { field });
		};
		self.pos += N;
		Ok(bytes)
	}
}

impl<'a> From<&'a [u8]> for BufferCursor<'a> {
	fn from(data: &'a [u8]) -> Self {
		Self::new(data)
	}
}

impl<'a> From<&'a Vec<u8>> for BufferCursor<'a> {
	fn from(data: &'a Vec<u8>) -> Self {
		Self::new(data)
	}
}

impl<'a, const N: usize> From<&'a [u8; N]> for BufferCursor<'a> {
	fn from(data: &'a [u8; N]) -> Self {
		Self::new(data)
	}
}
