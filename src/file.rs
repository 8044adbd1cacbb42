//! Reading whole files into the arena

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::arena::{Arena, ArenaAlloc};
use crate::error::Result;

/// Read all of `filename` into one arena allocation
///
/// The allocation is exactly the file length plus one byte; that last byte
/// is set to `\n` as a sentinel for text consumers such as shader
/// compilers. If reading fails the arena is rewound to where it was before
/// the call.
pub fn read_entire_file<P: AsRef<Path>>(arena: &mut Arena, filename: P) -> Result<ArenaAlloc> {
    let filename = filename.as_ref();
    let mut file = File::open(filename)?;
    let len = file.metadata()?.len() as usize;

    let mark = arena.mark();
    let alloc = arena.alloc(len + 1)?;
    let read = {
        let buf = arena.bytes_mut(alloc)?;
        let r = file.read_exact(&mut buf[..len]);
        if r.is_ok() {
            buf[len] = b'\n';
        }
        r
    };
    if let Err(e) = read {
        warn!("reading {} failed: {}", filename.display(), e);
        arena.rewind(mark);
        return Err(e.into());
    }
    debug!("read {} ({} bytes)", filename.display(), len);
    Ok(alloc)
}
