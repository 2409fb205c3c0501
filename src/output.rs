// src/output.rs
use crate::error::SdeResult;
use crate::trajectory::Trajectory;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `t,x0,x1,...` followed by one row per time point
pub fn write_trajectory<W: Write>(out: &mut W, trajectory: &Trajectory) -> SdeResult<()> {
    write!(out, "t")?;
    for k in 0..trajectory.dim() {
        write!(out, ",x{}", k)?;
    }
    writeln!(out)?;

    for (t, state) in trajectory.iter() {
        write!(out, "{}", t)?;
        for value in state.iter() {
            write!(out, ",{}", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_trajectory_to_csv<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> SdeResult<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()?;
    Ok(())
}
