mod login;
mod signup;
mod utils;

pub use login::login_post;
pub use signup::signup_post;
