//! Binary trajectory payloads returned by the `traj/frame` and `traj/path` routes.
//!
//! Both are packed little-endian records:
//! - frame: `i32` frame count, `f32` time, 9 × `f32` unit cell (3×3, row-major),
//!   then 3 × `f32` per atom;
//! - path trace: 3 × `f32` per frame.

use crate::error::FetchError;

const FRAME_HEADER_LEN: usize = 4 + 4 + 9 * 4;
const XYZ_LEN: usize = 3 * 4;

/// One timestep of a trajectory as served by the data server.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Total number of frames in the trajectory.
    pub num_frames: u32,
    pub time: f32,
    pub cell: [f32; 9],
    pub coords: Vec<[f32; 3]>,
}

impl Frame {
    pub fn num_atoms(&self) -> usize {
        self.coords.len()
    }
}

/// Positions of one atom across the requested frames.
pub type PathTrace = Vec<[f32; 3]>;

fn f32_at(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn xyz_triplets(bytes: &[u8], what: &str) -> Result<Vec<[f32; 3]>, FetchError> {
    if bytes.len() % XYZ_LEN != 0 {
        return Err(FetchError::payload(format!(
            "{} section of {} bytes is not a multiple of {}",
            what,
            bytes.len(),
            XYZ_LEN
        )));
    }
    Ok(bytes
        .chunks_exact(XYZ_LEN)
        .map(|c| [f32_at(&c[0..4]), f32_at(&c[4..8]), f32_at(&c[8..12])])
        .collect())
}

/// Decodes a `traj/frame` response body.
pub fn decode_frame(body: &[u8]) -> Result<Frame, FetchError> {
    if body.len() < FRAME_HEADER_LEN {
        return Err(FetchError::payload(format!(
            "frame of {} bytes is shorter than its {}-byte header",
            body.len(),
            FRAME_HEADER_LEN
        )));
    }
    let (header, rest) = body.split_at(FRAME_HEADER_LEN);

    let raw_count = i32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let num_frames = u32::try_from(raw_count)
        .map_err(|_| FetchError::payload(format!("negative frame count {}", raw_count)))?;
    let time = f32_at(&header[4..8]);

    let mut cell = [0f32; 9];
    for (slot, chunk) in cell.iter_mut().zip(header[8..].chunks_exact(4)) {
        *slot = f32_at(chunk);
    }

    Ok(Frame {
        num_frames,
        time,
        cell,
        coords: xyz_triplets(rest, "coordinate")?,
    })
}

/// Decodes a `traj/path` response body.
pub fn decode_path(body: &[u8]) -> Result<PathTrace, FetchError> {
    xyz_triplets(body, "path")
}
