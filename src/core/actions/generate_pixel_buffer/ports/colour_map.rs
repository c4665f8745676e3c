use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

/// Stateless mapping from an escape-time outcome to a display colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, value: IterationResult) -> Colour;

    fn display_name(&self) -> &str;
}

impl<M: ColourMap + ?Sized> ColourMap for Box<M> {
    fn map(&self, value: IterationResult) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
