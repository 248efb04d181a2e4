use approx::assert_relative_eq;
use plic3d::math::{Point, Real, Vector, MAX_CELL_EDGES, MAX_CELL_SIMPLICES};
use plic3d::measure::CellMeasure;
use plic3d::shape::{Cell, CellError, CellShape, CellTopology, Plane};

fn tetrahedron() -> [Point<Real>; 4] {
    [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ]
}

fn pyramid() -> [Point<Real>; 5] {
    [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.5, 0.5, 1.0),
    ]
}

fn wedge() -> [Point<Real>; 6] {
    [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
    ]
}

fn check_measure(shape: CellShape, points: &[Point<Real>], total: Real, below_half: Real) {
    let topology = shape.topology().unwrap();
    let measure = CellMeasure::new(Cell::new(points, &topology).unwrap());
    let plane = Plane::at_level(Vector::z_axis(), 0.5);

    assert_relative_eq!(measure.total(), total, epsilon = 1.0e-14);
    assert_relative_eq!(measure.fraction_below(&plane), below_half, epsilon = 1.0e-12);
}

#[test]
fn standard_shapes_measures() {
    // Above z = 0.5, the tetrahedron and the pyramid leave a copy of themselves scaled by 1/2.
    check_measure(CellShape::Tetrahedron, &tetrahedron(), 1.0 / 6.0, 7.0 / 8.0);
    check_measure(CellShape::Pyramid, &pyramid(), 1.0 / 3.0, 7.0 / 8.0);
    check_measure(CellShape::Wedge, &wedge(), 0.5, 0.5);
}

#[test]
fn measure_does_not_depend_on_orientation() {
    let mut points = tetrahedron();
    points.swap(1, 2);
    let topology = CellShape::Tetrahedron.topology().unwrap();
    let measure = CellMeasure::new(Cell::new(&points, &topology).unwrap());

    assert_relative_eq!(measure.total(), 1.0 / 6.0, epsilon = 1.0e-14);
    assert!(!measure.is_degenerate());
}

#[test]
fn axisymmetry_is_ignored_in_3d() {
    let points = wedge();
    let topology = CellShape::Wedge.topology().unwrap();
    let measure = CellMeasure::with_axisymmetry(Cell::new(&points, &topology).unwrap(), true);

    assert!(!measure.is_axisymmetric());
    assert_relative_eq!(measure.total(), 0.5, epsilon = 1.0e-14);
}

#[test]
fn point_count_must_match_the_topology() {
    let points = wedge();
    let topology = CellShape::Hexahedron.topology().unwrap();

    assert_eq!(
        Cell::new(&points, &topology).unwrap_err(),
        CellError::PointCountMismatch {
            expected: 8,
            found: 6
        }
    );
}

#[test]
fn invalid_topologies_are_rejected() {
    assert_eq!(
        CellTopology::new(4, &[[0, 1]], &[[0, 1, 2, 9]]),
        Err(CellError::IndexOutOfBounds {
            index: 9,
            num_points: 4
        })
    );
    assert_eq!(
        CellTopology::new(3, &[], &[]),
        Err(CellError::NotEnoughPoints(3))
    );

    let edges = vec![[0, 1]; MAX_CELL_EDGES + 1];
    assert_eq!(
        CellTopology::new(4, &edges, &[[0, 1, 2, 3]]),
        Err(CellError::TooManyEdges(MAX_CELL_EDGES + 1))
    );

    let tetrahedra = vec![[0, 1, 2, 3]; MAX_CELL_SIMPLICES + 1];
    assert_eq!(
        CellTopology::new(4, &[[0, 1]], &tetrahedra),
        Err(CellError::TooManySimplices(MAX_CELL_SIMPLICES + 1))
    );
}

#[test]
fn errors_are_displayed() {
    let err = CellError::PointCountMismatch {
        expected: 8,
        found: 6,
    };
    assert!(!err.to_string().is_empty());
}
