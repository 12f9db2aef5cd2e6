//! A minimal contiguous dynamic array built on an exclusively owned buffer.
//!
//! [`DynamicArray`] keeps a logical length separate from the physical
//! capacity of its [`OwnedBuffer`], grows by an explicit doubling law and
//! supports insertion and removal at arbitrary [`Cursor`] positions.
//!
//! ```
//! use simplevec::{DynamicArray, dynarray};
//!
//! let mut v = DynamicArray::new();
//! v.push_back(1);
//! v.push_back(2);
//! v.push_back(3);
//!
//! let pos = v.insert(v.begin() + 1, 99);
//! assert_eq!(v, [1, 99, 2, 3]);
//!
//! v.erase(pos);
//! assert_eq!(v, dynarray![1, 2, 3]);
//!
//! assert!(v.at(3).is_err());
//! ```

pub mod capacity;
pub mod cursor;
pub mod dynamic_array;
pub mod error;
pub mod macros;
pub mod result;

pub use capacity::{CapacityHint, reserve};
pub use cursor::Cursor;
pub use dynamic_array::{DynamicArray, IntoIter};
pub use error::{Error, ErrorKind};
pub use result::Result;
pub use simplevec_owned_buffer::OwnedBuffer;
