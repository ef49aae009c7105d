/* demos/read_frame.rs */
#![allow(missing_docs)]

use framecursor::{BufferCursor, Error};

fn main() {
	// Two Modbus/TCP requests back to back, as a transport might hand them over.
	let stream = [
		0x00, 0x01, 0x00, 0x00, 0x00, 0x06, 0x11, 0x03, 0x00, 0x6B, 0x00, 0x03, // read holding
		0x00, 0x02, 0x00, 0x00, 0x00, 0x06, 0x11, 0x06, 0x00, 0x01, 0x00, 0x03, // write single
		0x00, 0x03, 0x00, 0x00, // truncated tail
	];

	let mut cur = BufferCursor::new(&stream);
	while !cur.is_empty() {
		cur.mark(0);
		match read_request(&mut cur) {
			Ok(req) => println!("{req}"),
			Err(e) => {
				cur.reset();
				println!(
					"Incomplete frame ({e}), keeping {} bytes: {:02x?}",
					cur.available(),
					cur.snapshot_remaining()
				);
				break;
			}
		}
	}
}

struct Request<'a> {
	transaction: u16,
	unit: u8,
	function: u8,
	data: &'a [u8],
}

impl core::fmt::Display for Request<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(
			f,
			"tx={:#06x} unit={} fn={:#04x} data={:02x?}",
			self.transaction, self.unit, self.function, self.data
		)
	}
}

fn read_request<'a>(cur: &mut BufferCursor<'a>) -> Result<Request<'a>, Error> {
	let transaction = cur.read_u16("transaction id")?;
	let _protocol = cur.read_u16("protocol id")?;
	let len = cur.read_u16("length")? as usize;
	let pdu = cur.read_bytes(len, "pdu")?;

	let mut pdu = BufferCursor::new(pdu);
	let unit = pdu.read_u8("unit id")?;
	let function = pdu.read_u8("function code")?;
	Ok(Request {
		transaction,
		unit,
		function,
		data: pdu.remaining(),
	})
}
