//! Greedy decomposition of a Freeman chain into standard DSS.
//!
//! Usage:
//!   cargo run -p digiseg --example greedy_dss
//!   cargo run -p digiseg --example greedy_dss -- "0 0 00101001010"
//!
//! Prints one line per segment: covered index range and characteristics.

use digiseg::api::{decompose, Connectivity, DssComputer, FreemanChain};

const CONTOUR: &str = "31 16 11121212121212212121212212122122222322323233323333333323333323303330330030300000100010010010001000101010101111";

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| CONTOUR.to_string());
    let chain = match FreemanChain::parse(&text) {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("usage: greedy_dss [\"x y codes\"]: {e}");
            std::process::exit(2);
        }
    };
    let points = chain.points();
    let segments = match decompose(&points, || DssComputer::new(Connectivity::Four)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("decomposition failed: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "{} points, closed: {}, {} segments",
        points.len(),
        chain.is_closed(),
        segments.len()
    );
    for s in &segments {
        println!("{:>4}..{:<4} {}", s.range.start, s.range.end, s.primitive);
    }
}
