mod ancestors;
mod descendants;

pub use ancestors::Ancestors;
pub use descendants::Descendants;
