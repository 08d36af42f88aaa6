mod support;

use nalgebra::{Point3, Vector3};
use spiralstair::{
    float_types::Real,
    mesh::plane::{BACK, COPLANAR, FRONT, Plane, SPANNING},
    mesh::polygon::Polygon,
    mesh::vertex::Vertex,
};
use support::{approx_eq, make_polygon_3d};

const EPS: Real = 1e-9;

#[test]
fn flip() {
    let mut plane = Plane::from_normal(Vector3::y(), 2.0);
    plane.flip();
    assert_eq!(plane.normal(), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(plane.offset(), -2.0);
}

#[test]
fn from_points_follows_right_hand_rule() {
    let plane = Plane::from_points(
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    );
    assert!(approx_eq(plane.normal().z, 1.0, EPS));
    assert!(approx_eq(plane.offset(), 1.0, EPS));
}

#[test]
fn from_loop_rejects_collinear_points() {
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ];
    assert!(Plane::from_loop(&points).is_none());
}

#[test]
fn vertical_through_faces_increasing_angle() {
    let center = Point3::new(0.0, 0.0, 0.5);
    let plane = Plane::vertical_through(&center, 30.0);

    // the plane is vertical and contains the axis
    assert!(approx_eq(plane.normal().z, 0.0, EPS));
    assert!(approx_eq(plane.signed_distance(&Point3::new(0.0, 0.0, 7.0)), 0.0, EPS));

    // a point on the 30° ray lies on the plane, one at 40° lies in front
    let at = |deg: Real| {
        let a = deg.to_radians();
        Point3::new(a.cos(), a.sin(), 0.25)
    };
    assert_eq!(plane.orient_point(&at(30.0)), COPLANAR);
    assert_eq!(plane.orient_point(&at(40.0)), FRONT);
    assert_eq!(plane.orient_point(&at(20.0)), BACK);
    // the opposite ray belongs to the same plane
    assert_eq!(plane.orient_point(&at(210.0)), COPLANAR);
}

#[test]
fn classify_polygon() {
    let plane = Plane::from_normal(Vector3::x(), 0.0);
    let spanning = make_polygon_3d(&[[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]);
    let front = make_polygon_3d(&[[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.0]]);
    assert_eq!(plane.classify_polygon(&spanning), SPANNING);
    assert_eq!(plane.classify_polygon(&front), FRONT);
}

#[test]
fn split_polygon() {
    // Define a plane that splits the XY plane at y=0
    let plane = Plane::from_normal(Vector3::new(0.0, 1.0, 0.0), 0.0);

    // A polygon that crosses y=0 line: a square from ( -1, -1 ) to (1, 1 )
    let poly: Polygon<()> = Polygon::new(
        vec![
            Vertex::new(Point3::new(-1.0, -1.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(1.0, -1.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(1.0, 1.0, 0.0), Vector3::z()),
            Vertex::new(Point3::new(-1.0, 1.0, 0.0), Vector3::z()),
        ],
        None,
    );

    let (cf, cb, f, b) = plane.split_polygon(&poly);
    assert_eq!(cf.len(), 0);
    assert_eq!(cb.len(), 0);
    assert_eq!(f.len(), 1);
    assert_eq!(b.len(), 1);

    for v in &f[0].vertices {
        assert!(v.pos.y >= -EPS);
    }
    for v in &b[0].vertices {
        assert!(v.pos.y <= EPS);
    }

    // both halves keep the source plane and together cover the source area
    assert_eq!(f[0].plane, poly.plane);
    assert!(approx_eq(f[0].area() + b[0].area(), poly.area(), 1e-9));
}

#[test]
fn split_polygon_sorts_coplanar_by_facing() {
    let plane = Plane::from_normal(Vector3::z(), 0.0);
    let up = make_polygon_3d(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    let mut down = up.clone();
    down.flip();

    let (cf, cb, _, _) = plane.split_polygon(&up);
    assert_eq!((cf.len(), cb.len()), (1, 0));
    let (cf, cb, _, _) = plane.split_polygon(&down);
    assert_eq!((cf.len(), cb.len()), (0, 1));
}

#[test]
fn to_xy_transform_flattens_plane() {
    let plane = Plane::from_point_normal(&Point3::new(0.0, 0.0, 3.0), Vector3::new(1.0, 1.0, 1.0));
    let (to_xy, from_xy) = plane.to_xy_transform();

    let p = Point3::new(3.0, 0.0, 0.0);
    assert!(approx_eq(plane.signed_distance(&p), 0.0, EPS));
    let flat = to_xy.transform_point(&p);
    assert!(approx_eq(flat.z, 0.0, 1e-9));
    let back = from_xy.transform_point(&flat);
    assert!((back - p).norm() < 1e-9);
}

#[test]
fn split_point_matches_across_shared_edge() {
    let p = [0.1, 0.7, 0.3];
    let q = [0.9, 0.2, 1.1];
    // the two triangles walk the shared edge in opposite directions
    let left = make_polygon_3d(&[p, q, [0.2, 1.5, 0.0]]);
    let right = make_polygon_3d(&[q, p, [0.5, -0.4, 0.6]]);
    let plane = Plane::from_normal(Vector3::x(), 0.3);

    let split_points = |poly: &Polygon<()>| -> Vec<Point3<Real>> {
        let (_, _, front, _) = plane.split_polygon(poly);
        front
            .iter()
            .flat_map(|piece| piece.vertices.iter().map(|v| v.pos))
            .filter(|pos| approx_eq(pos.x, 0.3, EPS))
            .collect()
    };
    let from_left = split_points(&left);
    let from_right = split_points(&right);
    assert!(!from_left.is_empty() && !from_right.is_empty());

    // exact equality: edge matching relies on identical bits
    assert!(
        from_left.iter().any(|a| from_right.contains(a)),
        "{from_left:?} vs {from_right:?}"
    );
}
