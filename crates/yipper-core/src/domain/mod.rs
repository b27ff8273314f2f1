//! Domain entities - the core business objects.

mod yip;

pub use yip::{NewYip, Yip};
