//! A circular buffer with fixed capacity and a choice of admission policy.
//!
//! [`RingBuffer`] keeps up to `capacity` elements in one contiguous
//! allocation made at construction time and hands them back in insertion
//! order. The interesting part is what happens once the buffer is full:
//!
//! - [`push`](RingBuffer::push) always admits the new element, evicting the
//!   oldest one to make room;
//! - [`try_push`](RingBuffer::try_push) refuses and hands the element back
//!   to the caller instead.
//!
//! The two policies are separate operations rather than a flag, so code that
//! must not lose data cannot accidentally call the lossy one.
//!
//! # Feature Flags
//! The **ringbuffer** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; disable it for `no_std` environments (the crate still
//!     requires `alloc` for the heap-allocated store)
//!
//! # Capacity
//!
//! The capacity is fixed at construction and never changes; every one of the
//! `capacity` slots is usable. Constructing with capacity zero fails with
//! [`InvalidCapacityError`].
//!
//! # Examples
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buffer: RingBuffer<i32> = RingBuffer::new(3).unwrap();
//!
//! buffer.push(1);
//! buffer.push(2);
//! buffer.push(3);
//! assert!(buffer.is_full());
//!
//! // Overwrite-on-full: admitting 4 evicts the oldest element, 1.
//! assert_eq!(buffer.push(4), Some(1));
//! assert_eq!(buffer.try_pop(), Some(2));
//!
//! // Bounded insertion never evicts.
//! buffer.push(5);
//! let rejected = buffer.try_push(6).unwrap_err();
//! assert_eq!(rejected.element, 6);
//! ```
//!
//! # Iterator
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buffer: RingBuffer<usize> = RingBuffer::new(4).unwrap();
//!
//! buffer.extend(0..6);
//!
//! let kept: Vec<_> = buffer.into_iter().collect();
//! assert_eq!(kept, vec![2, 3, 4, 5]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
mod ringbuffer;
mod utils;

pub use error::{CapacityError, InvalidCapacityError, OutOfRangeError};
pub use ringbuffer::{Drain, IntoIter, Iter, IterMut, RingBuffer};
