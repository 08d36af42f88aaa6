use spiralstair::{
    Mesh, Scene,
    errors::SceneError,
    traits::CSGOps,
};

fn disc() -> Mesh<()> {
    Mesh::cylinder(1.0, 0.1, 8, None)
}

#[test]
fn insert_bumps_taken_names() {
    let mut scene = Scene::new();
    let a = scene.insert("stair", disc());
    let b = scene.insert("stair", disc());
    let c = scene.insert("stair", disc());
    assert_eq!(scene.get(a).unwrap().name, "stair");
    assert_eq!(scene.get(b).unwrap().name, "stair1");
    assert_eq!(scene.get(c).unwrap().name, "stair2");

    // a numbered name counts up from its stem
    let d = scene.insert("stair1", disc());
    assert_eq!(scene.get(d).unwrap().name, "stair3");
}

#[test]
fn rename_resolves_collisions() {
    let mut scene = Scene::new();
    let a = scene.insert("spine", disc());
    let b = scene.insert("tread", disc());
    assert_eq!(scene.rename(b, "spine").unwrap(), "spine1");
    assert_eq!(scene.rename(a, "spine").unwrap(), "spine");
    assert_eq!(scene.find("spine1"), Some(b));
}

#[test]
fn duplicate_and_translate() {
    let mut scene = Scene::new();
    let a = scene.insert("stair", disc());
    let b = scene.duplicate(a, "stair").unwrap();
    scene.translate(b, 0.0, 0.0, 2.0).unwrap();

    let za = scene.get(a).unwrap().mesh.bounding_box().mins.z;
    let zb = scene.get(b).unwrap().mesh.bounding_box().mins.z;
    assert_eq!(za, 0.0);
    assert!((zb - 2.0).abs() < 1e-12);
}

#[test]
fn unite_consumes_inputs() {
    let mut scene = Scene::new();
    let a = scene.insert("stair", disc());
    let b = scene.insert("stair", disc().translate(0.0, 0.0, 1.0));
    let merged = scene.unite(&[a, b], "stairs").unwrap();

    assert_eq!(scene.len(), 1);
    assert_eq!(scene.get(merged).unwrap().mesh.polygons.len(), disc().polygons.len() * 2);
    assert_eq!(scene.get(a).err(), Some(SceneError::UnknownObject(a)));
}

#[test]
fn unite_rejects_bad_selections() {
    let mut scene: Scene<()> = Scene::new();
    assert_eq!(scene.unite(&[], "x").err(), Some(SceneError::EmptySelection));

    let a = scene.insert("a", disc());
    scene.remove(a).unwrap();
    assert_eq!(scene.unite(&[a], "x").err(), Some(SceneError::UnknownObject(a)));
    assert!(scene.is_empty());
}

#[test]
fn unite_rejects_repeated_ids_without_consuming() {
    let mut scene = Scene::new();
    let a = scene.insert("a", disc());
    let b = scene.insert("b", disc().translate(0.0, 0.0, 1.0));
    assert_eq!(
        scene.unite(&[a, b, a], "ab").err(),
        Some(SceneError::DuplicateSelection(a))
    );
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.get(a).unwrap().name, "a");
    assert_eq!(scene.get(b).unwrap().name, "b");

    // a later valid unite still works
    let merged = scene.unite(&[a, b], "ab").unwrap();
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.get(merged).unwrap().name, "ab");
}

#[test]
fn ids_are_not_reused() {
    let mut scene = Scene::new();
    let a = scene.insert("a", disc());
    scene.remove(a).unwrap();
    let b = scene.insert("a", disc());
    assert_ne!(a, b);
    assert_eq!(scene.get(b).unwrap().name, "a");
    assert_eq!(scene.iter().count(), 1);
}
