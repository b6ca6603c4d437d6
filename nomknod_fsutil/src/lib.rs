//! Wrappers around the system calls behind the `nomknod` shim.

pub use self::create::*;
pub use self::cstring::*;
pub use self::errno::*;
pub use self::openat::*;

mod create;
mod cstring;
mod errno;
mod openat;
