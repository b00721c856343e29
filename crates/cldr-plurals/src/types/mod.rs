mod category;
mod operand;

pub use category::PluralCategory;
pub use operand::Operand;
