//! Background render worker for interactive exploration.
//!
//! Input layers submit [`ExplorerCommand`]s; the worker applies them one at a
//! time against the [`ExplorerSession`](crate::controllers::explorer::session::ExplorerSession)
//! it owns and hands each outcome to an [`InteractiveControllerPresenterPort`].

pub mod commands;
mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use commands::ExplorerCommand;
pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::failed_render::FailedRender;
pub use events::render_event::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
