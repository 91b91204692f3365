//! Unit tests mirroring the `src/` layout, one file per source file

mod algorithm;
mod io;
