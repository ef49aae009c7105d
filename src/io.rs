/* src/io.rs */

//! `std::io` adapters so a cursor can feed code written against `Read`.

use std::io;

use crate::BufferCursor;

impl io::Read for BufferCursor<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		Ok(self.read_into(buf).unwrap_or(0))
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
		if self.available() < buf.len() {
			return Err(io::ErrorKind::UnexpectedEof.into());
		}
		self.read_into(buf);
		Ok(())
	}
}

impl io::BufRead for BufferCursor<'_> {
	fn fill_buf(&mut self) -> io::Result<&[u8]> {
		Ok(self.remaining())
	}

	fn consume(&mut self, amt: usize) {
		self.skip(amt);
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, Read};

	use crate::BufferCursor;

	#[test]
	fn read_reports_eof_as_zero() {
		let buf = [1, 2, 3];
		let mut cur = BufferCursor::new(&buf);
		let mut out = Vec::new();
		assert_eq!(cur.read_to_end(&mut out).unwrap(), 3);
		assert_eq!(out, [1, 2, 3]);
		assert_eq!(cur.read(&mut [0u8; 4]).unwrap(), 0);
	}

	#[test]
	fn read_exact_leaves_cursor_on_short_input() {
		let buf = [1, 2, 3];
		let mut cur = BufferCursor::new(&buf);
		let mut out = [0u8; 4];
		let err = cur.read_exact(&mut out).unwrap_err();
		assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
		assert_eq!(cur.available(), 3);
	}

	#[test]
	fn buf_read_lines() {
		let buf = b"unit=1\nfn=3\n";
		let cur = BufferCursor::new(buf);
		let lines: Vec<String> = cur.lines().map(Result::unwrap).collect();
		assert_eq!(lines, ["unit=1", "fn=3"]);
	}

	#[test]
	fn consume_is_clamped() {
		let buf = [1, 2];
		let mut cur = BufferCursor::new(&buf);
		cur.consume(5);
		assert!(cur.fill_buf().unwrap().is_empty());
	}
}
