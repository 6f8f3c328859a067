//! Maze generation CLI: renders a generated maze as ASCII or exports the
//! boundary artifacts (adjacency matrix, reduced graph, role positions) as
//! JSON for external consumers.

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{
    AdjacencyMatrix, DEFAULT_ENEMY_COUNT, Direction, EnemyKind, Maze, ReducedGraph, Role,
};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 4)]
    rows: usize,
    /// Grid width in cells
    #[arg(long, default_value_t = 5)]
    columns: usize,
    /// Number of enemy cells to place
    #[arg(long, default_value_t = DEFAULT_ENEMY_COUNT)]
    enemies: usize,
    /// Generation seed; identical seeds reproduce identical mazes
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Row of the carving start cell
    #[arg(long, default_value_t = 0)]
    start_row: usize,
    /// Column of the carving start cell
    #[arg(long, default_value_t = 0)]
    start_col: usize,
    /// Emit the boundary artifacts as JSON instead of ASCII output
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    rows: usize,
    columns: usize,
    seed: u64,
    fingerprint: String,
    roles: RoleReport,
    adjacency: MatrixReport,
    reduced: ReducedReport,
}

#[derive(Serialize)]
struct RoleReport {
    player: Vec<(usize, usize)>,
    door: Vec<(usize, usize)>,
    key: Vec<(usize, usize)>,
    enemies: Vec<(usize, usize)>,
}

#[derive(Serialize)]
struct MatrixReport {
    size: usize,
    entries: Vec<Vec<u32>>,
}

#[derive(Serialize)]
struct ReducedReport {
    size: usize,
    entries: Vec<Vec<u32>>,
    index: Vec<IndexEntry>,
}

#[derive(Serialize)]
struct IndexEntry {
    node: String,
    index: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut maze = Maze::new(args.rows, args.columns, args.seed)
        .context("grid construction failed")?;
    maze.generate(args.start_row, args.start_col).context("maze generation failed")?;
    maze.assign_roles(args.enemies).context("role assignment failed")?;

    if args.json {
        let report = build_report(&maze).context("artifact export failed")?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_ascii(&maze));
        println!();
        println!("seed: {}", maze.seed());
        println!("fingerprint: {:016x}", maze.fingerprint());
        println!("player: {:?}", maze.positions_of_type(Role::Player));
        println!("door:   {:?}", maze.positions_of_type(Role::Door));
        println!("key:    {:?}", maze.positions_of_type(Role::Key));
        println!("enemies: {:?}", enemy_positions(&maze));
    }
    Ok(())
}

fn build_report(maze: &Maze) -> Result<Report> {
    let adjacency = maze.adjacency();
    let reduced = maze.reduced_graph().context("graph reduction failed")?;
    Ok(Report {
        rows: maze.rows(),
        columns: maze.columns(),
        seed: maze.seed(),
        fingerprint: format!("{:016x}", maze.fingerprint()),
        roles: RoleReport {
            player: maze.positions_of_type(Role::Player),
            door: maze.positions_of_type(Role::Door),
            key: maze.positions_of_type(Role::Key),
            enemies: enemy_positions(maze),
        },
        adjacency: MatrixReport { size: adjacency.size, entries: matrix_rows(&adjacency) },
        reduced: ReducedReport {
            size: reduced.size,
            entries: reduced_rows(&reduced),
            index: reduced
                .index_of
                .iter()
                .map(|(node, &index)| IndexEntry { node: node.to_string(), index })
                .collect(),
        },
    })
}

fn matrix_rows(matrix: &AdjacencyMatrix) -> Vec<Vec<u32>> {
    (0..matrix.size)
        .map(|from| (0..matrix.size).map(|to| matrix.at(from, to)).collect())
        .collect()
}

fn reduced_rows(graph: &ReducedGraph) -> Vec<Vec<u32>> {
    (0..graph.size).map(|from| (0..graph.size).map(|to| graph.at(from, to)).collect()).collect()
}

fn enemy_positions(maze: &Maze) -> Vec<(usize, usize)> {
    EnemyKind::ALL
        .into_iter()
        .flat_map(|kind| maze.positions_of_type(Role::Enemy(kind)))
        .collect()
}

/// Walls as `#`, passages as spaces, role letters at cell centers. Each cell
/// occupies one character with one wall character between cells, so the
/// output is `2 * rows + 1` lines of `2 * columns + 1` characters.
fn render_ascii(maze: &Maze) -> String {
    let rows = maze.rows();
    let columns = maze.columns();
    let mut canvas = vec![vec![b'#'; columns * 2 + 1]; rows * 2 + 1];

    for row in 0..rows {
        for column in 0..columns {
            let cell = maze.cell_at(row, column).expect("render loop stays in range");
            let y = row * 2 + 1;
            let x = column * 2 + 1;
            canvas[y][x] = role_symbol(cell.role());
            if !cell.has_wall(Direction::East) {
                canvas[y][x + 1] = b' ';
            }
            if !cell.has_wall(Direction::South) {
                canvas[y + 1][x] = b' ';
            }
        }
    }

    canvas
        .into_iter()
        .map(|line| String::from_utf8(line).expect("canvas holds ASCII only"))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

fn role_symbol(role: Option<Role>) -> u8 {
    match role {
        None => b' ',
        Some(Role::Player) => b'P',
        Some(Role::Door) => b'D',
        Some(Role::Key) => b'K',
        Some(Role::Enemy(EnemyKind::Chaser)) => b'1',
        Some(Role::Enemy(EnemyKind::Sentry)) => b'2',
        Some(Role::Enemy(EnemyKind::Prowler)) => b'3',
    }
}
