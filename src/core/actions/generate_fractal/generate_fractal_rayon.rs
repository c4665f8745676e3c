use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Pixels have no cross-dependencies, so the only
/// synchronisation is the final collect. Results come back row-major, exactly
/// as [`generate_fractal`](super::generate_fractal::generate_fractal) would
/// produce them.
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync + ?Sized,
    Alg::Success: Send,
{
    let side = algorithm.display_size().get();

    (0..side)
        .into_par_iter()
        .flat_map_iter(|y| (0..side).map(move |x| algorithm.compute(Point { x, y })))
        .collect()
}
