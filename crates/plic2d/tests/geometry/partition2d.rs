use approx::assert_relative_eq;
use plic2d::interface::{cell_interface2d, InterfaceOptions};
use plic2d::math::{Point, Real, Vector};
use plic2d::measure::CellMeasure;
use plic2d::query::{ChainVertex, OffsetMode, SolveStatus};
use plic2d::shape::{Cell, CellShape};

fn regular_polygon(n: usize, radius: Real, center: Point<Real>) -> Vec<Point<Real>> {
    (0..n)
        .map(|i| {
            let angle = core::f64::consts::TAU * i as Real / n as Real;
            center + Vector::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn random_normal(rng: &mut oorandom::Rand64) -> Vector<Real> {
    Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0)
}

#[test]
fn convex_cells_are_cut_twice() {
    let mut rng = oorandom::Rand64::new(42);

    for axisymmetric in [false, true] {
        let options = InterfaceOptions {
            axisymmetric,
            ..InterfaceOptions::default()
        };

        for n in [3, 4, 6, 11] {
            // Away from the axis of revolution.
            let points = regular_polygon(n, 1.0, Point::new(2.5, 0.5));
            let topology = CellShape::Polygon(n).topology().unwrap();
            let cell = Cell::new(&points, &topology).unwrap();
            let measure = CellMeasure::with_axisymmetry(cell, axisymmetric);

            for _ in 0..100 {
                let normal = random_normal(&mut rng);
                let target = 0.01 + rng.rand_float() * 0.98;
                let interface =
                    cell_interface2d(&cell, &normal, OffsetMode::Fraction(target), &options)
                        .unwrap();

                assert_eq!(interface.offset.status, SolveStatus::Converged);
                let plane = interface.offset.plane(interface.normal);
                assert_relative_eq!(measure.fraction_below(&plane), target, epsilon = 1.0e-8);

                // Every original vertex lies on exactly one chain, on its own side.
                let mut seen = vec![0; n];
                for (chain, inside) in [
                    (&interface.inside_chain, true),
                    (&interface.outside_chain, false),
                ] {
                    for vertex in chain.iter() {
                        if let ChainVertex::Original(i) = vertex {
                            seen[*i as usize] += 1;
                            let dist = plane.signed_distance(&points[*i as usize]);
                            assert_eq!(dist <= 0.0, inside);
                        }
                    }
                }
                assert!(seen.iter().all(|count| *count == 1));

                // Negative sentinels name the interface vertices, placed on their edges.
                for sentinel in interface
                    .inside_sentinels()
                    .iter()
                    .chain(interface.outside_sentinels().iter())
                {
                    if *sentinel >= 0 {
                        assert!((*sentinel as usize) < n);
                        continue;
                    }

                    let k = (-sentinel - 1) as usize;
                    assert!(k < 2);
                    let vertex = interface.interface[k];
                    let [e0, e1] = vertex.edge;
                    let (a, b) = (points[e0 as usize], points[e1 as usize]);
                    assert_relative_eq!(vertex.point, a + (b - a) * vertex.t, epsilon = 1.0e-12);
                    assert_relative_eq!(plane.signed_distance(&vertex.point), 0.0, epsilon = 1.0e-9);

                    let decoded = ChainVertex::from_sentinel(*sentinel).unwrap();
                    assert_eq!(interface.chain_point(&points, decoded), vertex.point);
                }
            }
        }
    }
}

#[test]
fn sentinels_round_trip() {
    let mut rng = oorandom::Rand64::new(3);

    for _ in 0..1000 {
        let index = rng.rand_range(0..1 << 20) as u32;
        let vertex = if rng.rand_float() < 0.5 {
            ChainVertex::Original(index)
        } else {
            ChainVertex::Interface(index)
        };
        let sentinel = vertex.to_sentinel();

        assert_eq!(sentinel < 0, matches!(vertex, ChainVertex::Interface(_)));
        assert_eq!(ChainVertex::from_sentinel(sentinel), Some(vertex));
    }
}

#[test]
fn out_of_range_sentinels_are_rejected() {
    let last = ChainVertex::Interface(u32::MAX);
    assert_eq!(ChainVertex::from_sentinel(last.to_sentinel()), Some(last));

    assert_eq!(ChainVertex::from_sentinel(i64::MIN), None);
    assert_eq!(ChainVertex::from_sentinel(last.to_sentinel() - 1), None);
    assert_eq!(ChainVertex::from_sentinel(u32::MAX as i64 + 1), None);
}
