pub mod failed_render;
