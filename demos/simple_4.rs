use grid_search::{find_path, GridModel, Strategy};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// with each of the three strategies. Nodes have a 4-neighborhood.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let grid: GridModel = "S..\n.#.\n..G".parse()?;
    println!("{}", grid);
    let (Some(start), Some(goal)) = (grid.start(), grid.goal()) else {
        return Err("grid needs a start and a goal".into());
    };
    for strategy in Strategy::ALL {
        let result = find_path(&grid, start, goal, strategy);
        println!("{strategy} ({} ms):", result.elapsed_millis);
        println!("{}", grid.render_path(&result.path));
    }
    Ok(())
}
