use clap::{Parser, Subcommand};
use obstacle_path::{PathEngine, Point, Route};

mod io;

use io::{parse_point, read_polygons_csv, write_polygons_csv};

#[derive(Parser)]
#[command(name = "obstacle_path_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two points around obstacles.
    Route {
        /// CSV file of obstacle outlines.
        input: String,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        start: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        end: Point,
        /// Print the route as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the visibility graph vertices and edges.
    Graph {
        input: String,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, requires = "end")]
        start: Option<Point>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true, requires = "start")]
        end: Option<Point>,
    },
    /// Merge overlapping obstacles and write them back as CSV.
    Merge { input: String, output: String },
}

fn print_point(p: Point) {
    println!("{:.3},{:.3}", p.x, p.y);
}

fn fail(msg: String) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}

fn load_engine(path: &str) -> PathEngine {
    let polygons = match read_polygons_csv(path) {
        Ok(polys) => polys,
        Err(e) => fail(format!("Error reading {}: {}", path, e)),
    };
    let mut engine = PathEngine::new();
    for poly in polygons {
        engine.add_obstacle(poly);
    }
    log::info!("loaded {} obstacles from {}", engine.obstacles().len(), path);
    engine
}

fn main() {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Route {
            input,
            start,
            end,
            json,
        } => {
            let mut engine = load_engine(&input);
            if let Err(e) = engine.set_query_endpoints(start, end) {
                fail(format!("Error: {}", e));
            }
            if json {
                match serde_json::to_string_pretty(engine.route()) {
                    Ok(s) => println!("{}", s),
                    Err(e) => fail(format!("Error encoding route: {}", e)),
                }
                return;
            }
            match engine.route() {
                Route::Found(path) => {
                    for &p in &path.points {
                        print_point(p);
                    }
                    println!("Length: {:.3}", path.length);
                }
                _ => println!("No path"),
            }
        }
        Commands::Graph { input, start, end } => {
            let mut engine = load_engine(&input);
            if let (Some(start), Some(end)) = (start, end) {
                if let Err(e) = engine.set_query_endpoints(start, end) {
                    fail(format!("Error: {}", e));
                }
            }
            let graph = engine.visibility_graph();
            println!("Vertices: {}", graph.len());
            for (i, v) in graph.vertices().iter().enumerate() {
                println!("{}: {:.3},{:.3}", i, v.x, v.y);
            }
            let edges = graph.edges();
            println!("Edges: {}", edges.len());
            for (i, j) in edges {
                println!("{}-{}", i, j);
            }
        }
        Commands::Merge { input, output } => {
            let engine = load_engine(&input);
            match write_polygons_csv(&output, engine.obstacles()) {
                Ok(()) => println!(
                    "Wrote {} obstacles to {}",
                    engine.obstacles().len(),
                    output
                ),
                Err(e) => fail(format!("Error writing {}: {}", output, e)),
            }
        }
    }
}
