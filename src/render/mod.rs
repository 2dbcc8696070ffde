//! Rendering boards to pixels and presenting them

pub mod paint;
pub mod sink;

pub use paint::{Renderer, RenderError, ALIVE_RGBA, DEAD_RGBA};
pub use sink::{AnySink, Frame, FrameSink, HeadlessSink, PpmSink, SinkControl, TerminalSink};
