//! `mdsrv frame <file> <index>` – fetch one trajectory frame.

use anyhow::{Context, Result};
use mdsrv_core::DataSourceClient;

pub async fn run_frame(
    client: &DataSourceClient,
    file: &str,
    index: u64,
    atoms: &[usize],
    url_only: bool,
) -> Result<()> {
    if url_only {
        if atoms.is_empty() {
            println!("{}", client.get_frame_url(file, index));
        } else {
            println!(
                "{}?{}",
                client.get_frame_url(file, index),
                client.get_frame_params(file, atoms)
            );
        }
        return Ok(());
    }

    let frame = client
        .get_frame(file, index, atoms)
        .await
        .with_context(|| format!("frame {} of {}", index, file))?;
    println!(
        "frame {}/{} time={} atoms={}",
        index,
        frame.num_frames,
        frame.time,
        frame.num_atoms()
    );
    let labels = row_labels(atoms, frame.num_atoms());
    for (atom, [x, y, z]) in labels.iter().zip(&frame.coords) {
        println!("{:>8} {:>12.3} {:>12.3} {:>12.3}", atom, x, y, z);
    }
    Ok(())
}

/// Atom index shown for each returned row. The server may ignore the atom
/// selection and send every atom; the requested indices only label the rows
/// when the counts match.
fn row_labels(requested: &[usize], returned: usize) -> Vec<usize> {
    if !requested.is_empty() && requested.len() == returned {
        requested.to_vec()
    } else {
        (0..returned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_selection_when_server_honours_it() {
        assert_eq!(row_labels(&[2, 0], 2), vec![2, 0]);
    }

    #[test]
    fn labels_fall_back_to_position_for_full_frames() {
        assert_eq!(row_labels(&[2], 3), vec![0, 1, 2]);
        assert_eq!(row_labels(&[], 3), vec![0, 1, 2]);
        assert_eq!(row_labels(&[4, 5, 6, 7], 2), vec![0, 1]);
    }
}
