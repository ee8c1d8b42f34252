// Toggles the corners of a single cell from stdin and prints every update
use std::io::{self, BufRead, Write};

use anyhow::Result;
use cubemarch_polygonize::{
    CellObserver, CellSnapshot, CellUpdate, InteractiveCell, InteractiveConfig,
};

fn print_update(update: &CellUpdate<'_>) {
    println!("GridCell Info (cube index {:#010b}):", update.cube_index);
    for i in 0..8 {
        let p = update.cell.positions[i];
        println!(
            "  Vertex {}: ({}, {}, {}) | {} | Density: {}",
            i,
            p.x,
            p.y,
            p.z,
            if update.corner_states[i] { "on " } else { "off" },
            update.cell.densities[i]
        );
    }
    println!("  Triangles: {}", update.triangles.len());
    for (i, triangle) in update.triangles.iter().enumerate() {
        let [a, b, c] = triangle.points;
        println!(
            "    #{}: ({:.2}, {:.2}, {:.2}) ({:.2}, {:.2}, {:.2}) ({:.2}, {:.2}, {:.2})",
            i, a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (tx, rx) = flume::unbounded::<CellSnapshot>();
    let observers: Vec<Box<dyn CellObserver>> = vec![Box::new(print_update), Box::new(tx)];
    let mut cell = InteractiveCell::with_observers(InteractiveConfig::default(), observers)?;

    println!("Enter a corner index 0-7 to toggle it, or 'q' to quit.");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input == "q" {
            break;
        }

        match input.parse::<usize>() {
            Ok(index) => {
                if let Err(e) = cell.toggle(index) {
                    println!("  ✗ {}", e);
                }
            }
            Err(_) => println!("  ✗ '{}' is not a corner index", input),
        }
    }

    let history: Vec<CellSnapshot> = rx.drain().collect();
    println!("Received {} updates", history.len());
    if let Some(last) = history.last() {
        log::info!("Final cube index {:#010b}", last.cube_index);
    }

    Ok(())
}
