// Industry news lookup. Headlines feed into post generation as trending topics.

pub mod feed;
pub mod handlers;
