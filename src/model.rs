/*!
The segment capability and the concrete segments built on it.
*/

mod fixed;
mod kind;
mod raw;
mod segment;
mod text;
pub use fixed::*;
pub use kind::*;
pub use raw::*;
pub use segment::*;
pub use text::*;
