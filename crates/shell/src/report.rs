//! Printing the selected bodies.

use std::io::Write;

use star_finder::Neighbor;

/// Writes one `<id>: (<x>, <y>, <z>)` line per neighbor, in order.
///
/// With `with_distances`, each line ends with ` [<distance>]`.
///
/// # Errors
///
/// - If writing to `out` fails.
pub fn write_neighbors<W: Write>(mut out: W, neighbors: &[Neighbor], with_distances: bool) -> std::io::Result<()> {
    for n in neighbors {
        if with_distances {
            writeln!(out, "{} [{}]", n.record(), n.distance())?;
        } else {
            writeln!(out, "{}", n.record())?;
        }
    }
    out.flush()
}
