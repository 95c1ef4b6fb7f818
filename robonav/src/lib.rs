//! Robot navigation on a warehouse occupancy grid.
//!
//! [`run`] loads a map, plans a shortest route with A* and then either
//! prints the result or animates a robot driving along it in the terminal.

pub mod config;
pub mod error;
pub mod maps;
pub mod navigator;
pub mod render;

use log::{info, warn};
use robonav_core::{GridModel, OccupancyMap};
use robonav_paths::{Outcome, Path, SearchBudget, distance_map, find_path_within};
use robonav_view::{App, AppConfig, CrosstermDriver};

pub use config::{Args, Config, MapSource, Timing};
pub use error::Error;

use navigator::Navigator;
use render::Board;

/// Plan a route from the map's start to its goal.
pub fn plan(map: &OccupancyMap, budget: SearchBudget) -> Result<Path, Error> {
    let model = GridModel::build(map)?;
    let (start, goal) = (model.start(), model.goal());
    info!("planning from {start} to {goal}");

    match find_path_within(&model, start, goal, budget) {
        Outcome::Found(path) => {
            info!("Path found! Length: {} steps", path.steps());
            Ok(path)
        }
        Outcome::Unreachable => {
            let region = distance_map(&model, model.bounds(), start);
            warn!(
                "No path found! The start region holds {} of {} cells",
                region.reached(),
                model.bounds().len()
            );
            Err(Error::Unreachable { start, goal })
        }
        Outcome::Exhausted { expanded } => {
            warn!("search budget exhausted after {expanded} expansions");
            Err(Error::Exhausted { expanded })
        }
    }
}

/// Load, plan, then print or animate.
pub fn run(config: &Config) -> Result<(), Error> {
    let map = maps::load(&config.map)?;
    let path = plan(&map, config.budget)?;

    let mut board = Board::new(&map);
    board.overlay_path(&path);

    if config.print {
        println!("{}", board.to_text(None));
        return Ok(());
    }

    let navigator = Navigator::new(board, path, config.timing);
    let (width, height) = navigator.screen_size();
    let mut app = App::new(AppConfig {
        model: navigator,
        driver: CrosstermDriver::new(),
        width,
        height,
    });
    app.run().map_err(Error::Terminal)?;

    if app.model().arrived() {
        info!("Goal reached!");
    } else {
        info!("stopped by user at {}", app.model().robot());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn asset(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("maps")
            .join(name)
    }

    #[test]
    fn warehouse_route_is_shortest() {
        let map = maps::load(&MapSource::Builtin).unwrap();
        let path = plan(&map, SearchBudget::Unlimited).unwrap();
        let model = GridModel::build(&map).unwrap();
        let bfs = distance_map(&model, model.bounds(), model.start());
        assert_eq!(Some(path.steps() as i32), bfs.at(model.goal()));
        assert_eq!(path.start(), model.start());
        assert_eq!(path.goal(), model.goal());
    }

    #[test]
    fn sealed_goal_is_unreachable() {
        let map = maps::load(&MapSource::Text(asset("sealed.txt"))).unwrap();
        let err = plan(&map, SearchBudget::Unlimited).unwrap_err();
        assert!(matches!(err, Error::Unreachable { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn tiny_budget_gives_up() {
        let map = maps::load(&MapSource::Builtin).unwrap();
        let err = plan(&map, SearchBudget::Expansions(2)).unwrap_err();
        assert!(matches!(err, Error::Exhausted { expanded: 2 }));
    }

    #[test]
    fn bad_map_is_reported_before_search() {
        let map = OccupancyMap::parse("S..\n...").unwrap();
        let err = plan(&map, SearchBudget::Unlimited).unwrap_err();
        assert!(matches!(err, Error::InvalidMap(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn print_mode_runs_without_terminal() {
        let config = Config {
            map: MapSource::Json(asset("aisles.json")),
            print: true,
            ..Config::default()
        };
        run(&config).unwrap();
    }
}
