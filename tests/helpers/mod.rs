/* tests/helpers/mod.rs */

/// Modbus/TCP read-holding-registers request: MBAP header + PDU.
pub(crate) fn read_request() -> Vec<u8> {
	hex::decode("002a000000061103006b0003").unwrap()
}

/// The same request preceded and followed by transport noise.
pub(crate) fn framed_in_noise() -> (Vec<u8>, usize, usize) {
	let adu = read_request();
	let mut buf = vec![0xFF; 3];
	buf.extend_from_slice(&adu);
	buf.extend_from_slice(&[0xEE; 4]);
	(buf, 3, adu.len())
}

pub(crate) fn sample() -> [u8; 5] {
	[10, 20, 30, 40, 50]
}
