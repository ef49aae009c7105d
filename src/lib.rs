/* src/lib.rs */

//! Zero-copy byte cursor for decoding binary protocol frames.
//!
//! [`BufferCursor`] walks a borrowed byte region, exposing byte and bulk
//! reads, big-endian field reads, skip/rewind and mark/reset. End of data
//! is reported as `None`, never as an error, and nothing on the read path
//! takes a lock.
//!
//! With the `std` feature the cursor also implements [`std::io::Read`] and
//! [`std::io::BufRead`], and [`SharedCursor`] offers a locked wrapper for
//! exporting snapshots across threads.
//!
//! ```
//! use framecursor::BufferCursor;
//!
//! // Modbus/TCP header followed by a read-holding-registers request.
//! let adu = [0x00, 0x2A, 0x00, 0x00, 0x00, 0x06, 0x11, 0x03, 0x00, 0x6B, 0x00, 0x03];
//! let mut cur = BufferCursor::new(&adu);
//! assert_eq!(cur.read_u16("transaction id").unwrap(), 0x2A);
//! cur.skip(2);
//! let len = cur.read_u16("length").unwrap() as usize;
//! let pdu = cur.read_bytes(len, "pdu").unwrap();
//! assert_eq!(pdu[1], 0x03);
//! assert!(cur.is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod cursor;
mod error;
#[cfg(feature = "std")]
mod io;
mod log;
#[cfg(feature = "std")]
mod shared;

pub use crate::cursor::BufferCursor;
pub use crate::error::Error;
#[cfg(feature = "std")]
pub use crate::shared::SharedCursor;
