//! Stand-ins for the `mknod` family of functions,
//! for programs that need the symbols to link
//! but can live without real device nodes.
//!
//! [`mknod`] and [`mknodat`] never create a special file.
//! Whatever file type the mode asks for,
//! they create an empty regular file instead,
//! with the permission bits from the mode.
//! The device number is ignored.
//! [`mknod_legacy`] and [`mknod_extended`] do nothing at all.
//!
//! The [`ffi`] module exports the same functions under their C names
//! (`mknod`, `mknodat`, `_mknod`, and `_xmknod`),
//! so that the cdylib or staticlib built from this crate
//! can be linked into, or preloaded by, other programs.

pub use self::mknod::*;

pub mod ffi;

mod mknod;

#[cfg(test)]
mod testdata;
