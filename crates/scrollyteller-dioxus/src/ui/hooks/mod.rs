mod visibility;

pub use visibility::{VisibilityHandle, use_visibility};
