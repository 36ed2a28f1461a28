mod failures;
mod navigation;
pub mod support;
