pub mod ownership;
pub mod password;
pub mod token;

pub use ownership::{authorize_resource_access, ResourceAccess};
pub use token::{Claims, TokenError, TokenService};
