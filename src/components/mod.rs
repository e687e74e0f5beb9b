mod anchor_link;
mod nav;
mod product_card;
mod reveal;

pub use anchor_link::{fragment_target, AnchorLink};
pub use nav::Nav;
pub use product_card::ProductCard;
pub use reveal::Reveal;
