/* src/shared.rs */

//! A cursor behind a lock, for exporting snapshots across threads.

use alloc::vec::Vec;

use parking_lot::{Mutex, MutexGuard};

use crate::BufferCursor;

/// A [`BufferCursor`] guarded by a mutex.
///
/// The plain cursor is single-owner and unsynchronized. When one thread
/// decodes while another needs a consistent copy of the frame, share a
/// `SharedCursor` instead: [`snapshot_all`](Self::snapshot_all) holds the
/// lock only for the duration of the copy.
///
/// ```
/// use framecursor::{BufferCursor, SharedCursor};
///
/// let frame = [0x00, 0x01, 0x00, 0x00, 0x00, 0x06];
/// let shared = SharedCursor::new(BufferCursor::new(&frame));
/// std::thread::scope(|s| {
///     s.spawn(|| shared.with(|cur| cur.skip(2)));
///     s.spawn(|| assert_eq!(shared.snapshot_all(), frame));
/// });
/// ```
#[derive(Debug, Default)]
pub struct SharedCursor<'a> {
	inner: Mutex<BufferCursor<'a>>,
}

impl<'a> SharedCursor<'a> {
	/// Wrap `cursor`.
	#[must_use]
	pub fn new(cursor: BufferCursor<'a>) -> Self {
		Self {
			inner: Mutex::new(cursor),
		}
	}

	/// Owned copy of the whole view, taken under the lock.
	#[must_use]
	pub fn snapshot_all(&self) -> Vec<u8> {
		self.inner.lock().snapshot_all()
	}

	/// Exclusive access to the cursor until the guard is dropped.
	pub fn lock(&self) -> MutexGuard<'_, BufferCursor<'a>> {
		self.inner.lock()
	}

	/// Run `f` with the lock held.
	pub fn with<R>(&self, f: impl FnOnce(&mut BufferCursor<'a>) -> R) -> R {
		f(&mut self.inner.lock())
	}

	/// Unwrap the cursor.
	#[must_use]
	pub fn into_inner(self) -> BufferCursor<'a> {
		self.inner.into_inner()
	}
}

impl<'a> From<BufferCursor<'a>> for SharedCursor<'a> {
	fn from(cursor: BufferCursor<'a>) -> Self {
		Self::new(cursor)
	}
}
