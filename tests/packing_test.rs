//! Packing tables on disk and radius sequences

use std::fs;
use std::path::Path;
use std::sync::Arc;

use approx::assert_relative_eq;
use dobble_layout::packing::{
    compute_radii, compute_radii_by_name, CachedCatalog, DirectoryCatalog, PackingCatalog,
    PackingFamily,
};
use dobble_layout::{DobbleError, ErrorKind};
use rayon::prelude::*;

fn write_family(root: &Path, family: &str, coords: &[(usize, &str)], radius: &str) {
    let dir = root.join(family);
    fs::create_dir_all(&dir).unwrap();
    for (n, body) in coords {
        fs::write(dir.join(format!("{}{}.txt", family, n)), body).unwrap();
    }
    fs::write(dir.join("radius.txt"), radius).unwrap();
}

#[test]
fn test_directory_catalog_lookup() {
    println!("\n--- Test: DirectoryCatalog lookup ---");
    let tmp = tempfile::tempdir().unwrap();
    write_family(
        tmp.path(),
        "ccic",
        &[(3, "1 -0.5 0.1\n2  0.4 0.2\n3 0.0 -0.45\n")],
        "2 0.5\n3 0.464101615\n4 0.41\n",
    );
    let catalog = DirectoryCatalog::new(tmp.path());

    let solution = catalog.lookup("ccic", 3).unwrap();
    assert_eq!(solution.family, PackingFamily::Ccic);
    assert_eq!(solution.centers, vec![(-0.5, 0.1), (0.4, 0.2), (0.0, -0.45)]);
    assert_relative_eq!(solution.largest_radius, 0.464101615);

    let circles = solution.circles().unwrap();
    assert_eq!(circles.len(), 3);
    assert_relative_eq!(circles[2].radius, 0.464101615);
    assert!(circles[0].radius < circles[1].radius);
    assert!(circles[1].radius < circles[2].radius);
    println!("  [PASSED] Coordinates and radius are read and paired by index.");
}

#[test]
fn test_directory_catalog_failures() {
    let tmp = tempfile::tempdir().unwrap();
    write_family(
        tmp.path(),
        "cci",
        &[(2, "1 0.5 0.0\n"), (4, "1 0 0 0\n")],
        "2 0.5\n4 0.41\n",
    );
    let catalog = DirectoryCatalog::new(tmp.path());

    // no coordinate file
    let err = catalog.solution(PackingFamily::Cci, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // no radius entry
    fs::write(tmp.path().join("cci").join("cci6.txt"), "1 0 0\n".repeat(6)).unwrap();
    assert_eq!(catalog.largest_radius(PackingFamily::Cci, 6).unwrap_err().kind(), ErrorKind::NotFound);

    // line count does not match the circle count
    let err = catalog.coordinates(PackingFamily::Cci, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);

    // four columns
    let err = catalog.coordinates(PackingFamily::Cci, 4).unwrap_err();
    assert!(matches!(err, DobbleError::Malformed { line: 1, .. }));

    // unknown family name
    assert!(matches!(
        catalog.lookup("hexagonal", 2),
        Err(DobbleError::UnsupportedFamily(_))
    ));
}

#[test]
fn test_cached_catalog_shared_between_threads() {
    println!("\n--- Test: CachedCatalog concurrency ---");
    let tmp = tempfile::tempdir().unwrap();
    write_family(tmp.path(), "cci", &[(2, "1 -0.5 0\n2 0.5 0\n")], "2 0.5\n");
    let catalog = Arc::new(CachedCatalog::new(DirectoryCatalog::new(tmp.path())));

    let radii: Vec<f64> = (0..64)
        .into_par_iter()
        .map(|_| catalog.largest_radius(PackingFamily::Cci, 2).unwrap())
        .collect();
    assert!(radii.iter().all(|&r| r == 0.5));
    assert_eq!(catalog.cached_len(), 1);

    // removing the files does not affect cached entries
    fs::remove_dir_all(tmp.path().join("cci")).unwrap();
    assert!(catalog.solution(PackingFamily::Cci, 2).is_ok());
    assert!(catalog.solution(PackingFamily::Cci, 3).is_err());
    assert_eq!(catalog.cached_len(), 1);
    println!("  [PASSED] One cached entry served to all readers.");
}

#[test]
fn test_radii_per_family() {
    println!("\n--- Test: compute_radii per family ---");
    for family in PackingFamily::ALL {
        let radii = compute_radii(0.3, 10, family).unwrap();
        assert_eq!(radii.len(), 10);
        assert_eq!(radii[9], 0.3);
        assert!(radii.windows(2).all(|w| w[0] <= w[1]), "{} not ascending", family);
        println!("  - {}: smallest {:.6}", family, radii[0]);
    }

    let equal = compute_radii_by_name(0.25, 5, "cci").unwrap();
    assert!(equal.iter().all(|&r| r == 0.25));

    // ccir: sqrt(k) scaled so that sqrt(4) -> 0.4
    let ccir = compute_radii_by_name(0.4, 4, "ccir").unwrap();
    assert_relative_eq!(ccir[0], 0.2, epsilon = 1e-12);
    assert_relative_eq!(ccir[3], 0.4);

    // ccic: k^(-1/2) reversed, so the smallest circle is 4^(-1/2) / 1 * 0.4
    let ccic = compute_radii_by_name(0.4, 4, "ccic").unwrap();
    assert_relative_eq!(ccic[0], 0.2, epsilon = 1e-12);
    println!("  [PASSED] Sequences end exactly at the largest radius.");
}

#[test]
fn test_radii_arguments() {
    assert_eq!(compute_radii(0.0, 3, PackingFamily::Cci).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(compute_radii(0.5, 0, PackingFamily::Cci).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert!(matches!(
        compute_radii_by_name(0.5, 3, "ccix"),
        Err(DobbleError::UnsupportedFamily(name)) if name == "ccix"
    ));
}
