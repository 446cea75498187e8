// Facebook page connection and publishing.
// The network backend sits behind the `Publisher` trait; handlers never call the Graph API directly.

pub mod credentials;
pub mod handlers;
pub mod publisher;
