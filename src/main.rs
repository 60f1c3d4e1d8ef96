use std::io::{self, Write};

use spaceship::{compare_and_report, Complex};

/// The pairs shown, in order
const SCENARIOS: [((f64, f64), (f64, f64)); 2] = [((1., 2.), (1.5, 1.5)), ((1., 0.), (0., 1.))];

fn main() -> io::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (lhs, rhs) in SCENARIOS {
        compare_and_report(&mut out, Complex::from(lhs), Complex::from(rhs))?;
    }
    writeln!(out)?;

    out.flush()
}
