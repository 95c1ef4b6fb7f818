//! Command-line arguments and the run configuration derived from them.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use robonav_paths::SearchBudget;

/// Find a shortest path with A* and watch a robot drive along it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Map file: one row per line with `.`/`0` free, `#`/`1` wall, `S`
    /// start, `E` goal. A `.json` file holds an array of row strings.
    /// Without a file the built-in warehouse map is used.
    pub map: Option<PathBuf>,

    /// Delay between robot moves, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// How long to stay on screen after reaching the goal, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub hold_ms: u64,

    /// Give up the search after expanding this many cells
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the map with the path overlay instead of animating
    #[arg(long)]
    pub print: bool,
}

/// Where the occupancy map comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    Builtin,
    Text(PathBuf),
    Json(PathBuf),
}

impl MapSource {
    /// Pick the format from the file extension.
    pub fn from_path(path: PathBuf) -> Self {
        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::Json(path)
        } else {
            Self::Text(path)
        }
    }
}

/// Animation pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause between two robot moves.
    pub step: Duration,
    /// Pause at the goal before the app exits.
    pub hold: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(100),
            hold: Duration::from_secs(2),
        }
    }
}

/// Everything [`run`](crate::run) needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub map: MapSource,
    pub timing: Timing,
    pub budget: SearchBudget,
    pub print: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapSource::Builtin,
            timing: Timing::default(),
            budget: SearchBudget::Unlimited,
            print: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            map: args.map.map_or(MapSource::Builtin, MapSource::from_path),
            timing: Timing {
                step: Duration::from_millis(args.delay_ms),
                hold: Duration::from_millis(args.hold_ms),
            },
            budget: args
                .max_expansions
                .map_or(SearchBudget::Unlimited, SearchBudget::Expansions),
            print: args.print,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Config {
        Config::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults() {
        let c = parse(&["robonav"]);
        assert_eq!(c.map, MapSource::Builtin);
        assert_eq!(c.timing, Timing::default());
        assert_eq!(c.budget, SearchBudget::Unlimited);
        assert!(!c.print);
    }

    #[test]
    fn map_format_follows_extension() {
        assert_eq!(
            parse(&["robonav", "maps/a.JSON"]).map,
            MapSource::Json(PathBuf::from("maps/a.JSON"))
        );
        assert_eq!(
            parse(&["robonav", "maps/a.txt"]).map,
            MapSource::Text(PathBuf::from("maps/a.txt"))
        );
    }

    #[test]
    fn flags() {
        let c = parse(&[
            "robonav",
            "--delay-ms",
            "5",
            "--hold-ms",
            "0",
            "--max-expansions",
            "40",
            "--print",
        ]);
        assert_eq!(c.timing.step, Duration::from_millis(5));
        assert_eq!(c.timing.hold, Duration::ZERO);
        assert_eq!(c.budget, SearchBudget::Expansions(40));
        assert!(c.print);
    }

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
