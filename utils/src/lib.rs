pub mod bits;
pub mod bytes;
pub mod random;
pub mod system;
pub mod traits;
