pub mod currency;
pub mod post;
pub mod post_tag;
pub mod region;
pub mod region_currency;
pub mod tag;

pub use currency::{Currency, CurrencyWithRegions};
pub use post::Post;
pub use post_tag::PostTag;
pub use region::Region;
pub use region_currency::RegionCurrency;
pub use tag::{Tag, TagWithPosts};
