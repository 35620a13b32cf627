pub use super::auth::*;
pub use super::common::*;
pub use super::exercise::*;
pub use super::news::*;
pub use super::resource::*;
pub use super::study::*;
pub use super::user::*;
