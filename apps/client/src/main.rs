use std::path::{Path, PathBuf};

use clap::Parser;

use client::assets::avatar_path;
use client::domain::layout::screen_anchor;
use client::domain::rotation::{display_rng, plan_rotation};
use client::domain::view::project;
use client::error::ProjectionError;
use client::protocol::board::BoardPayload;
use client::protocol::snapshot::{decode_anchor, decode_roster, decode_snapshot};

mod telemetry;

#[derive(Parser)]
#[command(name = "boardview")]
#[command(about = "Render a board snapshot for one viewer")]
struct Args {
    /// Snapshot JSON file as pushed by the transport layer
    snapshot: PathBuf,

    /// Anchor-context JSON file (the viewer's private knowledge)
    #[arg(short, long)]
    anchor: PathBuf,

    /// Roster JSON file for display-order planning
    #[arg(long, requires = "acting")]
    roster: Option<PathBuf>,

    /// Acting player id whose roster display order to print
    #[arg(long)]
    acting: Option<i64>,
}

fn main() {
    telemetry::init_tracing();
    let args = Args::parse();

    let snapshot = load_or_exit("snapshot", &args.snapshot, decode_snapshot);
    let anchor = load_or_exit("anchor context", &args.anchor, decode_anchor);

    let payload = BoardPayload::from_result(project(&snapshot, &anchor));
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to encode board: {e}");
            std::process::exit(1);
        }
    }

    if let BoardPayload::Board(board) = &payload {
        for seat in &board.seats {
            let at = screen_anchor(seat.seat_id);
            println!(
                "# {:?} at ({:.0}%, {:.0}%) avatar {}",
                seat.seat_id,
                at.x,
                at.y,
                avatar_path(&seat.avatar)
            );
        }
    }

    if let (Some(roster_path), Some(acting)) = (&args.roster, args.acting) {
        let roster = load_or_exit("roster", roster_path, decode_roster);

        let mut rng = display_rng(snapshot.game_id);
        let slots = plan_rotation(&roster, acting, anchor.id, &mut rng);
        match serde_json::to_string_pretty(&slots) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to encode roster order: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn load_or_exit<T>(
    what: &str,
    path: &Path,
    decode: impl Fn(&str) -> Result<T, ProjectionError>,
) -> T {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("failed to read {what} {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    match decode(&raw) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("failed to decode {what}: {e}");
            std::process::exit(1);
        }
    }
}
