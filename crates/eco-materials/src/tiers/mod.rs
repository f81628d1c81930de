//! The five cascade tiers, most trusted first.

pub mod detailed;
pub mod fallback;
pub mod keyword;
pub mod product_type;

pub use detailed::{PercentageStrategy, RankedStrategy};
pub use fallback::FallbackStrategy;
pub use keyword::KeywordStrategy;
pub use product_type::{ProductTypeProfile, ProductTypeStrategy};
