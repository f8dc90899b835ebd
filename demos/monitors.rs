//! List monitors and show where the cursor is.
//!
//! Run with: cargo run --example monitors

use clickbeat::{coords, cursor_position, monitors};

fn main() {
    let all = match monitors() {
        Ok(all) => all,
        Err(err) => {
            eprintln!("monitor enumeration failed: {err}");
            std::process::exit(1);
        }
    };

    println!("Detected {} monitor(s):", all.len());
    for monitor in &all {
        println!("  [{}] {}", monitor.id, monitor);
    }

    match cursor_position() {
        Ok((abs_x, abs_y)) => {
            println!("\nCursor at absolute ({abs_x}, {abs_y})");
            match coords::locate(&all, abs_x, abs_y) {
                Some((monitor, rel_x, rel_y)) => {
                    println!("  = ({rel_x}, {rel_y}) relative to {}", monitor.name);
                }
                None => println!("  outside every detected monitor"),
            }
        }
        Err(err) => eprintln!("\nCursor query failed: {err}"),
    }
}
