mod support;

use nalgebra::{Point3, Vector3};
use spiralstair::{
    float_types::Real,
    mesh::{
        Mesh,
        cut::{Side, cut_shells, merge_shells},
        plane::Plane,
        shells::Shell,
    },
    traits::CSGOps,
};
use support::{approx_eq, bounding_box, ngon_area};

fn cylinder() -> Mesh<()> {
    Mesh::cylinder(1.0, 2.0, 32, None)
}

#[test]
fn cylinder_stands_on_xy_plane() {
    let cyl = cylinder();
    // two fans and one quad per segment
    assert_eq!(cyl.polygons.len(), 32 * 3);

    let bb = bounding_box(&cyl.polygons);
    assert!(approx_eq(bb[0], -1.0, 1e-9));
    assert!(approx_eq(bb[2], 0.0, 1e-12));
    assert!(approx_eq(bb[3], 1.0, 1e-9));
    assert!(approx_eq(bb[5], 2.0, 1e-12));

    let center = cyl.center_point();
    assert!(center.coords.xy().norm() < 1e-9);
    assert!(approx_eq(center.z, 1.0, 1e-12));
    assert!(approx_eq(cyl.height(), 2.0, 1e-12));
}

#[test]
fn cylinder_is_closed_and_manifold() {
    let cyl = cylinder();
    assert!(cyl.is_manifold());
    assert!(cyl.is_closed());
    assert!(cyl.boundary_loops().is_empty());

    let volume = cyl.volume().expect("volume").abs();
    assert!(approx_eq(volume, ngon_area(1.0, 32) * 2.0, 1e-9));
}

#[test]
fn cylinder_clamps_segments() {
    let tri: Mesh<()> = Mesh::cylinder(1.0, 1.0, 1, None);
    assert_eq!(tri.polygons.len(), 9);
    assert!(tri.is_closed());
}

#[test]
fn cut_extracts_back_without_capping() {
    let cyl = cylinder();
    let plane = Plane::vertical_through(&cyl.center_point(), 10.0);
    let pieces = cyl.cut(&plane);

    assert!(!pieces.kept.is_empty());
    assert!(!pieces.extracted.is_empty());
    for v in pieces.kept.vertices() {
        assert!(plane.signed_distance(&v.pos) > -1e-9);
    }
    for v in pieces.extracted.vertices() {
        assert!(plane.signed_distance(&v.pos) < 1e-9);
    }

    // nothing is lost or added
    let total = pieces.kept.surface_area() + pieces.extracted.surface_area();
    assert!(approx_eq(total, cyl.surface_area(), 1e-9));

    // both halves are open along the cut
    assert!(!pieces.kept.is_closed());
    assert!(!pieces.extracted.is_closed());
    assert_eq!(pieces.kept.boundary_loops().len(), 1);
}

#[test]
fn shell_cut_appends_side_tags() {
    let cyl = cylinder();
    let center = cyl.center_point();
    let shells = cut_shells(&[Shell::whole(cyl)], &Plane::vertical_through(&center, 0.5));
    let shells = cut_shells(&shells, &Plane::vertical_through(&center, 60.0));

    let tags: Vec<Vec<Side>> = shells.iter().map(|s| s.sides.clone()).collect();
    assert_eq!(
        tags,
        vec![
            vec![Side::Front, Side::Front],
            vec![Side::Front, Side::Back],
            vec![Side::Back, Side::Front],
            vec![Side::Back, Side::Back],
        ]
    );
}

#[test]
fn separate_splits_disjoint_solids() {
    let a: Mesh<()> = Mesh::cylinder(1.0, 1.0, 16, None);
    let b = a.translate(5.0, 0.0, 0.0);
    let both = a.union(&b);

    let parts = both.separate();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].polygons.len(), a.polygons.len());
    assert!(parts[0].bounding_box().maxs.x < 2.0);
    assert!(parts[1].bounding_box().mins.x > 3.0);
}

#[test]
fn separate_joins_split_polygons() {
    // the cut duplicates every split vertex; the halves must still join up
    let cyl = cylinder();
    let pieces = cyl.cut(&Plane::vertical_through(&cyl.center_point(), 33.0));
    assert_eq!(pieces.kept.separate().len(), 1);
    assert_eq!(pieces.extracted.separate().len(), 1);
}

#[test]
fn close_border_caps_half_cylinder() {
    let cyl = cylinder();
    let half = cyl.cut(&Plane::vertical_through(&cyl.center_point(), 0.0)).kept;
    let closed = half.close_border().expect("closable");

    assert!(closed.is_closed());
    assert!(closed.is_manifold());
    let volume = closed.volume().expect("volume").abs();
    assert!(approx_eq(volume, ngon_area(1.0, 32), 1e-6));
}

#[test]
fn close_border_caps_hinged_opening() {
    // three quadrants leave two half-planes meeting at the axis
    let cyl = cylinder();
    let center = cyl.center_point();
    let shells = cut_shells(&[Shell::whole(cyl.clone())], &Plane::vertical_through(&center, 0.5));
    let shells = cut_shells(&shells, &Plane::vertical_through(&center, 90.5));
    let reflex: Vec<_> = shells
        .into_iter()
        .filter(|s| s.sides != vec![Side::Back, Side::Front])
        .collect();
    assert_eq!(reflex.len(), 3);

    let merged = merge_shells(&reflex);
    let loops = merged.boundary_loops();
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].planar_facets().map(|f| f.len()), Some(2));

    let closed = merged.close_border().expect("closable");
    assert!(closed.is_manifold());
    let volume = closed.volume().expect("volume").abs();
    let full = cyl.volume().expect("volume").abs();
    assert!(approx_eq(volume / full, 0.75, 0.01));
}

#[test]
fn close_border_leaves_closed_mesh_alone() {
    let cyl = cylinder();
    let closed = cyl.close_border().expect("already closed");
    assert_eq!(closed.polygons.len(), cyl.polygons.len());
}

#[test]
fn transform_moves_normals_with_geometry() {
    let cyl = cylinder();
    let turned = cyl.spin(90.0);
    // the first side quad faced +X; a quarter turn makes it face +Y
    let side = &turned.polygons[2];
    assert!((side.vertices[0].normal - Vector3::y()).norm() < 1e-9);

    let raised = cyl.translate(0.0, 0.0, 3.0);
    assert!(approx_eq(raised.bounding_box().mins.z, 3.0, 1e-12));
    assert!(approx_eq(raised.float().bounding_box().mins.z, 0.0, 1e-12));

    let wide = cyl.scale(2.0, 2.0, 0.5);
    assert!(approx_eq(wide.bounding_box().maxs.x, 2.0, 1e-9));
    assert!(approx_eq(wide.height(), 1.0, 1e-12));
}

#[test]
fn merge_aggregates_polygons() {
    let a: Mesh<()> = Mesh::cylinder(1.0, 1.0, 8, None);
    let b = a.translate(0.0, 0.0, 1.0);
    let merged = Mesh::merge([&a, &b]);
    assert_eq!(merged.polygons.len(), a.polygons.len() * 2);
    assert!(approx_eq(merged.height(), 2.0, 1e-12));
    let mins = merged.bounding_box().mins;
    assert!((mins - Point3::new(-1.0, -1.0, 0.0)).norm() < 1e-9);
}

#[test]
fn with_metadata_tags_every_polygon() {
    let cyl: Mesh<u32> = Mesh::cylinder(1.0, 1.0, 8, None).with_metadata(7);
    assert_eq!(cyl.metadata, Some(7));
    assert!(cyl.polygons.iter().all(|p| p.metadata == Some(7)));
}

#[test]
fn mass_properties_center_on_axis() {
    let cyl = cylinder();
    let (mass, com) = cyl.mass_properties(2.0).expect("trimesh");
    assert!(mass.abs() > 0.0);
    assert!(com.coords.xy().norm() < 1e-6);
    assert!(approx_eq(com.z, 1.0, 1e-6));
}

#[test]
fn empty_mesh_has_no_trimesh() {
    let empty: Mesh<()> = Mesh::new();
    assert!(empty.to_trimesh().is_err());
    assert!(!empty.is_manifold());
    assert!(!empty.is_closed());
    let _: Real = empty.surface_area();
}
