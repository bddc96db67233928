pub mod pointer;
pub mod scroll;

pub use pointer::mount as mount_pointer;
pub use scroll::mount as mount_scroll;
