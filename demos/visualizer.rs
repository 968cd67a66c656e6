//! Terminal front-end for [Visualizer]. Reads one command per line from stdin:
//!
//! - `<x> <y>`: click on a cell
//! - `f`: find path
//! - `a`: next algorithm
//! - `r`: reset
//! - `q`: quit
use grid_search::Visualizer;
use grid_util::Point;
use std::io::{self, BufRead, Write};

fn draw(vis: &Visualizer, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "[{}]", vis.strategy_label())?;
    write!(out, "{}", vis)?;
    writeln!(out, "{}", vis.status_line())?;
    let time = vis.time_line();
    if !time.is_empty() {
        writeln!(out, "{}", time)?;
    }
    out.flush()
}

fn parse_click(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace().map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some(Point::new(x, y)),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let mut vis = Visualizer::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    draw(&vis, &mut out)?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "q" => break,
            "f" => {
                vis.find_path();
            }
            "a" => vis.cycle_strategy(),
            "r" => vis.reset(),
            other => match parse_click(other) {
                Some(point) => {
                    vis.handle_cell_click(point);
                }
                None => {
                    writeln!(out, "unknown command: {other}")?;
                    continue;
                }
            },
        }
        draw(&vis, &mut out)?;
    }
    Ok(())
}
