//! Builds each primitive, runs a few transforms, and prints statistics
//! and topology reports.
//!
//! Usage:
//! ```text
//! cargo run --example mesh_stats
//! RUST_LOG=polymesh=debug cargo run --example mesh_stats
//! ```

use std::f64::consts::FRAC_PI_4;

use polymesh::math::{Point3, Vector3};
use polymesh::operations::creation::{
    MakeCube, MakePlane, MakePyramid, MakeQuad, MakeTetrahedron, MakeTriangle, MakeUvSphere,
};
use polymesh::operations::modification::FlipFaces;
use polymesh::operations::query::MeshStatistics;
use polymesh::operations::transform::{Mirror, Rotate, Scale, Translate};
use polymesh::{Mesh, Result};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polymesh.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polymesh=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mesh_stats=info".parse().unwrap_or_default())
        .add_directive("polymesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let primitives: Vec<(&str, Mesh)> = vec![
        ("triangle", MakeTriangle::new(1.0).execute()?),
        ("quad", MakeQuad::new(2.0, 1.0).execute()?),
        ("plane", MakePlane::new(4.0, 4.0).with_segments(8, 8).execute()?),
        ("cube", MakeCube::new(1.0).execute()?),
        ("tetrahedron", MakeTetrahedron::new(1.0).execute()?),
        ("pyramid", MakePyramid::new(1.0, 1.5).execute()?),
        ("uv sphere", MakeUvSphere::new(1.0, 32, 16).execute()?),
    ];

    for (name, mesh) in &primitives {
        report(name, mesh);
    }

    // Transforms keep a closed mesh closed and outward-facing.
    let mut sphere = MakeUvSphere::new(1.0, 24, 12).execute()?;
    Scale::new(Point3::origin(), Vector3::new(2.0, 1.0, 0.5)).execute(&mut sphere)?;
    Rotate::new(Point3::origin(), Vector3::new(1.0, 1.0, 0.0), FRAC_PI_4).execute(&mut sphere)?;
    Translate::new(Vector3::new(0.0, 0.0, 3.0)).execute(&mut sphere)?;
    Mirror::new(Point3::origin(), Vector3::z()).execute(&mut sphere)?;
    report("transformed ellipsoid", &sphere);

    let mut inverted = MakeCube::new(1.0).execute()?;
    FlipFaces::new().execute(&mut inverted)?;
    if inverted.signed_volume() < 0.0 {
        warn!(
            signed_volume = inverted.signed_volume(),
            "flipped cube faces inward"
        );
    }

    Ok(())
}

fn report(name: &str, mesh: &Mesh) {
    let stats = MeshStatistics::compute(mesh);
    let topology = mesh.validate();
    info!(
        name,
        valid = topology.is_valid(),
        watertight = topology.is_watertight(),
        "checked mesh"
    );
    println!("== {name} ==");
    print!("{stats}");
    println!("{topology}");
}
