use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{find_path, CellState, GridModel, Strategy};
use grid_util::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_GRIDS: usize = 64;

fn random_scenarios(n: usize, wall_ratio: f64) -> Vec<(GridModel, Point, Point)> {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let goal = Point::new(n as i32 - 1, n as i32 - 1);
    (0..N_GRIDS)
        .map(|_| {
            let mut grid = GridModel::new(n, n);
            for x in 0..n as i32 {
                for y in 0..n as i32 {
                    if rng.gen_bool(wall_ratio) {
                        grid.set_cell(Point::new(x, y), CellState::Wall);
                    }
                }
            }
            grid.set_cell(start, CellState::Start);
            grid.set_cell(goal, CellState::Goal);
            (grid, start, goal)
        })
        .collect()
}

fn strategy_bench(c: &mut Criterion) {
    for (n, wall_ratio) in [(16, 0.0), (16, 0.3), (64, 0.3)] {
        let scenarios = random_scenarios(n, wall_ratio);
        for strategy in Strategy::ALL {
            c.bench_function(
                format!("{strategy}, {n}x{n}, {wall_ratio} walls").as_str(),
                |b| {
                    b.iter(|| {
                        for (grid, start, goal) in &scenarios {
                            black_box(find_path(grid, *start, *goal, strategy));
                        }
                    })
                },
            );
        }
    }
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
