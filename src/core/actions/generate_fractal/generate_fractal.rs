use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the algorithm's display on the calling thread,
/// scanning rows top to bottom.
pub fn generate_fractal<Alg: FractalAlgorithm + ?Sized>(algorithm: &Alg) -> Vec<Alg::Success> {
    let side = algorithm.display_size().get();

    (0..side)
        .flat_map(|y| (0..side).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::display_size::DisplaySize;

    struct StubAlgorithm {
        size: DisplaySize,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (u32, u32);

        fn display_size(&self) -> DisplaySize {
            self.size
        }

        fn compute(&self, pixel: Point) -> Self::Success {
            (pixel.x, pixel.y)
        }
    }

    #[test]
    fn test_covers_whole_grid_in_row_major_order() {
        let algorithm = StubAlgorithm {
            size: DisplaySize::new(3).unwrap(),
        };

        let results = generate_fractal(&algorithm);

        assert_eq!(
            results,
            vec![
                (0, 0), (1, 0), (2, 0),
                (0, 1), (1, 1), (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        );
    }

    #[test]
    fn test_single_pixel_display() {
        let algorithm = StubAlgorithm {
            size: DisplaySize::new(1).unwrap(),
        };

        assert_eq!(generate_fractal(&algorithm), vec![(0, 0)]);
    }
}
