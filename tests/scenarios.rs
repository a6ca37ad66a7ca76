use blockwalk::player::interaction::place;
use blockwalk::{
    Action, DdaCursor, GameSettings, Grid, InputState, NO_SURFACE, RayHit, Session, build_mesh,
    distance, load_world, raycast, save_world,
};
use glam::{IVec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, fill: f64) -> Grid {
    let mut grid = Grid::empty();
    for x in 0..16 {
        for y in 0..16 {
            for z in 0..16 {
                if rng.gen_bool(fill) {
                    let code = if rng.gen_bool(0.8) {
                        rng.gen_range(1..40)
                    } else {
                        -rng.gen_range(1..9)
                    };
                    grid.set(x, y, z, code).unwrap();
                }
            }
        }
    }
    grid
}

#[test]
fn single_block_mesh_has_24_vertices_36_indices() {
    let mut grid = Grid::empty();
    grid.set(5, 5, 5, 1).unwrap();
    let mesh = build_mesh(&grid);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.indices.len(), 36);
}

#[test]
fn no_face_between_adjacent_solid_cells() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let grid = random_grid(&mut rng, 0.4);
        let mesh = build_mesh(&grid);
        assert_eq!(mesh.vertex_count() % 4, 0);
        assert_eq!(mesh.indices.len() * 2, mesh.vertex_count() * 3);

        for (quad, normals) in mesh.normals.chunks_exact(12).enumerate() {
            let normal = Vec3::new(normals[0], normals[1], normals[2]);
            let corners = &mesh.positions[quad * 12..quad * 12 + 12];
            let center = Vec3::new(
                (corners[0] + corners[3] + corners[6] + corners[9]) / 4.0,
                (corners[1] + corners[4] + corners[7] + corners[10]) / 4.0,
                (corners[2] + corners[5] + corners[8] + corners[11]) / 4.0,
            );
            let inside = (center - normal * 0.5).floor().as_ivec3();
            let outside = (center + normal * 0.5).floor().as_ivec3();

            assert!(grid.is_solid(inside.x, inside.y, inside.z));
            assert!(
                !grid.is_solid(outside.x, outside.y, outside.z),
                "face between two solid cells at {}",
                inside
            );
        }
    }
}

#[test]
fn ray_down_the_z_axis_hits_after_five_steps() {
    let mut grid = Grid::empty();
    grid.set(5, 5, 5, 1).unwrap();
    let hit = raycast(&grid, Vec3::new(5.0, 5.0, 10.0), Vec3::new(0.0, 0.0, -1.0), 12);
    assert_eq!(
        hit,
        Some(RayHit {
            cell: IVec3::new(5, 5, 5),
            normal: IVec3::new(0, 0, 1),
            code: 1,
            steps: 5,
        })
    );
}

#[test]
fn ray_cells_move_away_from_origin() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let origin = Vec3::new(
            rng.gen_range(0.0..64.0),
            rng.gen_range(0.0..64.0),
            rng.gen_range(0.0..64.0),
        );
        let dir = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize_or_zero();
        if dir == Vec3::ZERO {
            continue;
        }

        let mut cursor = DdaCursor::new(origin, dir);
        let mut prev = cursor.cell();
        for cell in cursor.by_ref().take(30) {
            assert_eq!((cell - prev).abs().element_sum(), 1);
            prev = cell;
        }

        // Cells far along the walk are farther from the origin than the first ones.
        let near = DdaCursor::new(origin, dir).nth(1).unwrap().as_vec3() + Vec3::splat(0.5);
        let far = prev.as_vec3() + Vec3::splat(0.5);
        assert!(far.distance(origin) > near.distance(origin));
    }
}

#[test]
fn ray_entry_distance_strictly_increases() {
    // No two axes cross a cell boundary at the same t along this ray.
    let origin = Vec3::new(0.1, 0.2, 0.35);
    let dir = Vec3::new(0.3, 0.5, 0.7).normalize();
    let mut cursor = DdaCursor::new(origin, dir);
    let mut prev = cursor.distance();
    for _ in 0..60 {
        assert!(cursor.next().is_some());
        let t = cursor.distance();
        assert!(t > prev, "entry distance {} after {}", t, prev);
        prev = t;
    }
}

#[test]
fn distance_sentinel_and_surface_zero() {
    let mut grid = Grid::empty();
    grid.set(5, 5, 5, 1).unwrap();
    assert_eq!(distance(&grid, Vec3::new(30.5, 30.5, 30.5)), NO_SURFACE);
    assert_eq!(distance(&grid, Vec3::new(6.0, 5.5, 5.5)), 0.0);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("world");
    let mut rng = StdRng::seed_from_u64(9);
    let grid = random_grid(&mut rng, 0.3);

    save_world(&path, &grid).unwrap();
    let loaded = load_world(&path).unwrap();
    assert_eq!(loaded.cells(), grid.cells());
}

#[test]
fn jump_fires_once_per_press() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut settings = GameSettings::default();
    settings.world.path = dir.path().join("world");
    let mut session = Session::new(settings);

    let idle = InputState::default();
    for _ in 0..240 {
        session.frame(1.0 / 60.0, &idle);
    }
    assert!(session.controller().is_grounded(session.grid()));

    let mut input = InputState {
        jump_pressed: true,
        ..Default::default()
    };
    session.frame(1.0 / 60.0, &input);
    assert_eq!(session.controller().player.velocity.y, 6.0);

    // still holding the key: no new press event
    input.end_frame();
    let mut peak = session.controller().player.velocity.y;
    for _ in 0..20 {
        session.frame(1.0 / 60.0, &input);
        let vy = session.controller().player.velocity.y;
        assert!(vy <= peak);
        peak = vy;
    }
}

#[test]
fn placing_into_player_cell_is_refused() {
    let mut grid = Grid::generate_default();
    let before = grid.cells().to_vec();
    let hit = RayHit {
        cell: IVec3::new(8, 5, 8),
        normal: IVec3::new(0, 1, 0),
        code: 1,
        steps: 2,
    };
    let action = place(&mut grid, hit, IVec3::new(8, 6, 8), 3);
    assert!(matches!(action, Action::Refused(_)));
    assert_eq!(grid.cells(), &before[..]);
    assert_eq!(build_mesh(&grid).vertex_count(), build_mesh(&Grid::generate_default()).vertex_count());
}
