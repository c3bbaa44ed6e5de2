pub mod constants;
pub mod counter;
pub mod footer;
pub mod form;
pub mod menu;
pub mod notice;
pub mod particles;
pub mod scroll;
pub mod tilt;
pub mod trail;
pub mod typing;

pub use counter::*;
pub use footer::*;
pub use form::*;
pub use menu::*;
pub use notice::*;
pub use particles::*;
pub use scroll::*;
pub use tilt::*;
pub use trail::*;
pub use typing::*;
