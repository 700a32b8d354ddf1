use std::path::PathBuf;

use clap::Parser;
use coulombic::{ForceKind, ForceVector, Vec2, force_on_test_charge};

mod prompt;
mod visualize;

const POSITIVE_COLOR: &str = "0xC8322E";
const NEGATIVE_COLOR: &str = "0x2E5CC8";
const FORCE_COLOR: &str = "#2E8B57";

#[derive(Parser)]
#[command(name="coulombic", version, about, long_about = None)]
struct Cli {
    /// Fixed charge Q1 at the origin, in coulombs.
    /// Prompted for interactively if omitted.
    #[arg(long, allow_negative_numbers = true)]
    q1: Option<f64>,

    /// Test charge Q2, in coulombs.
    #[arg(long, allow_negative_numbers = true)]
    q2: Option<f64>,

    /// X coordinate of Q2, in meters.
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Y coordinate of Q2, in meters.
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Run the demonstration case (2 nC and -3 nC at (3, 4)) without prompting.
    #[arg(long, default_value_t = false)]
    example: bool,

    /// Open the diagram in a gnuplot window.
    #[arg(long, default_value_t = false)]
    gnuplot: bool,

    /// Save the diagram as a PNG.
    #[arg(short = 'o', long = "png-path")]
    png_path: Option<PathBuf>,
}

/// The two charges and where the test charge sits.
#[derive(Clone, Copy)]
struct System {
    /// Fixed charge at the origin, in coulombs.
    q1: f64,
    /// Test charge, in coulombs.
    q2: f64,
    /// Position of the test charge, in meters.
    position: Vec2,
}

fn main() {
    let cli = Cli::parse();
    let (system, force) = match main_inner(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = handle_output(&cli, system, &force) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn main_inner(cli: &Cli) -> anyhow::Result<(System, ForceVector)> {
    let system = acquire_system(cli)?;
    let force = force_on_test_charge(system.q1, system.q2, system.position)?;
    Ok((system, force))
}

/// Take the four scalars from CLI flags where given, otherwise prompt
/// for them on stdin.
fn acquire_system(cli: &Cli) -> anyhow::Result<System> {
    if cli.example {
        return Ok(System {
            q1: 2e-9,
            q2: -3e-9,
            position: Vec2::new(3.0, 4.0),
        });
    }
    let needs_prompting =
        cli.q1.is_none() || cli.q2.is_none() || cli.x.is_none() || cli.y.is_none();
    if needs_prompting {
        prompt::print_banner();
    }
    let q1 = match cli.q1 {
        Some(q) => q,
        None => prompt::read_f64("Charge Q1 at the origin [C]")?,
    };
    let q2 = match cli.q2 {
        Some(q) => q,
        None => prompt::read_f64("Charge Q2 [C]")?,
    };
    let x = match cli.x {
        Some(x) => x,
        None => prompt::read_f64("X coordinate of Q2 [m]")?,
    };
    let y = match cli.y {
        Some(y) => y,
        None => prompt::read_f64("Y coordinate of Q2 [m]")?,
    };
    Ok(System {
        q1,
        q2,
        position: Vec2::new(x, y),
    })
}

fn handle_output(cli: &Cli, system: System, force: &ForceVector) -> anyhow::Result<()> {
    print_report(&system, force);
    if let Some(ref p) = cli.png_path {
        visualize::save_png(&system, force, p.display().to_string())?;
    }
    if cli.gnuplot {
        pop_gnuplot_window(&system, force)?;
    }
    Ok(())
}

/// Prints the force report nicely to stdout.
fn print_report(system: &System, force: &ForceVector) {
    use colored::Colorize;
    let Vec2 { x, y } = system.position;
    println!("{}", "Electrostatic force on Q2".bold());
    println!("System:");
    println!("\tQ1 (fixed):  {:.2e} C at (0, 0)", system.q1);
    println!("\tQ2 (test):   {:.2e} C at ({x}, {y})", system.q2);
    println!("\tDistance:    {:.4} m", system.position.magnitude());
    let kind = match force.kind {
        ForceKind::Repulsion => "Repulsion".red(),
        ForceKind::Attraction => "Attraction".blue(),
        ForceKind::Neutral => "Neutral (a charge is zero, no force)".yellow(),
    };
    println!("\tKind:        {kind}");
    println!("Force vector on Q2:");
    println!("\tFx  = {:.6e} N", force.fx);
    println!("\tFy  = {:.6e} N", force.fy);
    println!("\t|F| = {:.6e} N", force.magnitude);
    println!("\tθ   = {:.2}°", force.angle_degrees);
}

/// Open a `gnuplot` window displaying the two charges and the force arrow.
fn pop_gnuplot_window(system: &System, force: &ForceVector) -> anyhow::Result<()> {
    use anyhow::Context;
    let gnuplot_program = gnuplot(system, force);
    let mut child = std::process::Command::new("gnuplot")
        .args(["-persist", "-"])
        .stdin(std::process::Stdio::piped())
        .spawn()
        .context("failed to start gnuplot")?;

    {
        let stdin = child.stdin.as_mut().context("failed to open stdin")?;
        use std::io::Write;
        stdin
            .write_all(gnuplot_program.as_bytes())
            .context("failed to write to stdin")?;
    }
    let _ = child.wait();
    Ok(())
}

/// Write a gnuplot program showing the charges and the scaled force arrow.
fn gnuplot(system: &System, force: &ForceVector) -> String {
    let Vec2 { x, y } = system.position;
    let span = visualize::chart_span(system.position);
    let q1_color = charge_color(system.q1);
    let q2_color = charge_color(system.q2);
    let q1 = system.q1;
    let q2 = system.q2;
    let kind = force.kind;

    // Scale the arrow so it stays visible next to the charges no matter
    // how many orders of magnitude the force spans.
    let (fx, fy) = visualize::scaled_arrow(force, span);
    let arrow = if force.magnitude > 0.0 {
        let tip_x = x + fx;
        let tip_y = y + fy;
        format!("set arrow 2 from {x},{y} to {tip_x},{tip_y} lw 2 lc rgb \"{FORCE_COLOR}\"\n")
    } else {
        String::new()
    };

    format!(
        "\
set term qt font \"Verdana\"
set title \"Coulomb force between point charges ({kind})\" noenhance
set xlabel \"x (m)\"
set ylabel \"y (m)\"
set grid
set size ratio -1
unset key

set xrange [{min}:{max}]
set yrange [{min}:{max}]

# Dashed line joining the charges.
set arrow 1 from 0,0 to {x},{y} nohead dt 2 lc rgb \"#808080\"
{arrow}

# Add labels for each charge
set label \"Q1 = {q1:.2e} C\" at 0,0 offset 1,1
set label \"Q2 = {q2:.2e} C\" at {x},{y} offset 1,1

# Plot the charges
plot \"-\" using 1:2:3 with points pointtype 7 pointsize 2 lc rgb variable title \"Charges\"
0 0 {q1_color}
{x} {y} {q2_color}
e

# Refresh plot to show labels
replot
",
        min = -span,
        max = span,
    )
}

fn charge_color(charge: f64) -> &'static str {
    if charge >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use coulombic::ForceKind;

    use crate::{Cli, System, handle_output, main_inner};

    fn cli_for(q1: f64, q2: f64, x: f64, y: f64) -> Cli {
        Cli {
            q1: Some(q1),
            q2: Some(q2),
            x: Some(x),
            y: Some(y),
            example: false,
            gnuplot: false,
            png_path: None,
        }
    }

    #[test]
    fn test_example_inner() {
        let cli = Cli {
            q1: None,
            q2: None,
            x: None,
            y: None,
            example: true,
            gnuplot: false,
            png_path: None,
        };
        let (system, force) = main_inner(&cli).unwrap();
        assert_eq!(force.kind, ForceKind::Attraction);
        assert!((force.magnitude - 2.1576e-9).abs() < 1e-15);
        handle_output(&cli, system, &force).unwrap();
    }

    /// Needs fonts installed for text rendering, so it only runs when
    /// COULOMBIC_RENDER_TEST is set.
    #[test]
    fn test_png_render() {
        if std::env::var("COULOMBIC_RENDER_TEST").is_err() {
            return;
        }
        let cli = Cli {
            q1: None,
            q2: None,
            x: None,
            y: None,
            example: true,
            gnuplot: false,
            png_path: Some(std::env::temp_dir().join("coulombic_test.png")),
        };
        let (system, force) = main_inner(&cli).unwrap();
        handle_output(&cli, system, &force).unwrap();
        assert!(cli.png_path.as_ref().unwrap().exists());
    }

    #[test]
    fn test_flags_skip_prompting() {
        let cli = cli_for(1e-9, 4e-9, -2.0, 0.5);
        let (_, force) = main_inner(&cli).unwrap();
        assert_eq!(force.kind, ForceKind::Repulsion);
    }

    #[test]
    fn test_origin_is_an_error() {
        let cli = cli_for(1e-9, 4e-9, 0.0, 0.0);
        assert!(main_inner(&cli).is_err());
    }

    #[test]
    fn test_neutral_reported() {
        let cli = cli_for(0.0, 4e-9, 1.0, 1.0);
        let (system, force) = main_inner(&cli).unwrap();
        assert_eq!(force.kind, ForceKind::Neutral);
        handle_output(&cli, system, &force).unwrap();
    }

    #[test]
    fn test_gnuplot_program_shape() {
        let cli = cli_for(2e-9, -3e-9, 3.0, 4.0);
        let (system, force) = main_inner(&cli).unwrap();
        let program = crate::gnuplot(&system, &force);
        assert!(program.contains("set arrow 1 from 0,0 to 3,4 nohead"));
        assert!(program.contains("set arrow 2 from 3,4"));
        assert!(program.contains("Q2 = -3.00e-9 C"));
    }

    #[test]
    fn test_gnuplot_program_no_arrow_when_neutral() {
        let system = System {
            q1: 0.0,
            q2: 4e-9,
            position: coulombic::Vec2::new(1.0, 1.0),
        };
        let force = coulombic::force_on_test_charge(0.0, 4e-9, system.position).unwrap();
        let program = crate::gnuplot(&system, &force);
        assert!(!program.contains("set arrow 2"));
    }
}
